//! Barcode objects and the plugin manager that builds them.
//!
//! Every renderer implements [`BarcodeObject`]. The [`ObjectPluginManager`]
//! maps symbology names such as `code128` or `ean13` to the concrete object
//! types in [`builtins`] and hands out a fresh object per request.

pub mod builtins;
pub mod options;
pub mod plugin_manager;

use std::fmt;

use crate::manager::Implements;

pub use builtins::{
    Codabar, Code128, Code25, Code25interleaved, Code39, Ean13, Ean2, Ean5, Ean8, ErrorObject,
    Identcode, Itf14, Leitcode, Planet, Postnet, Royalmail, Upca, Upce,
};
pub use options::ObjectOptions;
pub use plugin_manager::{
    default_table, ObjectPluginManager, DEFAULT_ALIASES, ERROR_SENTINEL, OBJECT_MANAGER_NAME,
};

/// Capability contract for barcode renderer objects.
///
/// The encoding itself lives with each symbology; the manager only needs to
/// know that a value is a barcode object with its own option state.
pub trait BarcodeObject: Send + fmt::Debug {
    /// Symbology name, e.g. `code128`.
    fn barcode_type(&self) -> &'static str;

    /// Current options.
    fn options(&self) -> &ObjectOptions;

    /// Mutable access to the options.
    fn options_mut(&mut self) -> &mut ObjectOptions;

    /// Text to encode.
    fn text(&self) -> &str {
        &self.options().text
    }

    /// Set the text to encode.
    fn set_text(&mut self, text: &str) {
        self.options_mut().text = text.to_string();
    }

    /// Whether this is the renderer used to draw failure messages.
    fn is_error_sentinel(&self) -> bool {
        false
    }
}

impl<T: BarcodeObject + 'static> Implements<dyn BarcodeObject> for T {
    fn upcast(self: Box<Self>) -> Box<dyn BarcodeObject> {
        self
    }
}
