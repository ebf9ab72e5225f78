//! Built-in barcode objects.
//!
//! These types carry option state only. Encoding and drawing for each
//! symbology are provided by the renderer backends.

use crate::object::options::ObjectOptions;
use crate::object::BarcodeObject;

macro_rules! barcode_objects {
    ($($(#[$meta:meta])* $name:ident => $kind:literal, $defaults:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                options: ObjectOptions,
            }

            impl $name {
                /// Create the object with its default options.
                pub fn new() -> Self {
                    $name { options: $defaults }
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl BarcodeObject for $name {
                fn barcode_type(&self) -> &'static str {
                    $kind
                }

                fn options(&self) -> &ObjectOptions {
                    &self.options
                }

                fn options_mut(&mut self) -> &mut ObjectOptions {
                    &mut self.options
                }
            }
        )*
    };
}

barcode_objects! {
    /// Codabar (NW-7)
    Codabar => "codabar", ObjectOptions::default();
    /// Code 128
    Code128 => "code128", ObjectOptions::default();
    /// Code 2 of 5
    Code25 => "code25", ObjectOptions::default();
    /// Interleaved 2 of 5
    Code25interleaved => "code25interleaved", ObjectOptions::default();
    /// Code 39
    Code39 => "code39", ObjectOptions::default();
    /// EAN-13
    Ean13 => "ean13", ObjectOptions::with_mandatory_checksum();
    /// EAN-2 add-on
    Ean2 => "ean2", ObjectOptions::default();
    /// EAN-5 add-on
    Ean5 => "ean5", ObjectOptions::default();
    /// EAN-8
    Ean8 => "ean8", ObjectOptions::with_mandatory_checksum();
    /// Deutsche Post Identcode
    Identcode => "identcode", ObjectOptions::with_mandatory_checksum();
    /// ITF-14
    Itf14 => "itf14", ObjectOptions::with_mandatory_checksum();
    /// Deutsche Post Leitcode
    Leitcode => "leitcode", ObjectOptions::with_mandatory_checksum();
    /// USPS PLANET
    Planet => "planet", ObjectOptions::default();
    /// USPS POSTNET
    Postnet => "postnet", ObjectOptions::default();
    /// Royal Mail 4-state customer code
    Royalmail => "royalmail", ObjectOptions::default();
    /// UPC-A
    Upca => "upca", ObjectOptions::with_mandatory_checksum();
    /// UPC-E
    Upce => "upce", ObjectOptions::with_mandatory_checksum();
}

/// Renderer used to draw an error message in place of a barcode.
///
/// Registered under the reserved `error` alias so callers can fall back to
/// it when the requested symbology fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObject {
    options: ObjectOptions,
}

impl ErrorObject {
    /// Create the error object. It never draws quiet zones or a checksum.
    pub fn new() -> Self {
        ErrorObject {
            options: ObjectOptions {
                with_quiet_zones: false,
                ..ObjectOptions::default()
            },
        }
    }
}

impl Default for ErrorObject {
    fn default() -> Self {
        Self::new()
    }
}

impl BarcodeObject for ErrorObject {
    fn barcode_type(&self) -> &'static str {
        "error"
    }

    fn options(&self) -> &ObjectOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut ObjectOptions {
        &mut self.options
    }

    fn is_error_sentinel(&self) -> bool {
        true
    }
}
