//! Option state carried by every barcode object.

use serde::{Deserialize, Serialize};

/// Drawing options of a barcode object.
///
/// Each object owns its own copy; objects handed out by the plugin manager
/// never share option state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectOptions {
    /// Text to encode
    pub text: String,

    /// Height of the bars, in units of `factor`
    pub bar_height: u32,

    /// Width of a thick bar
    pub bar_thick_width: u32,

    /// Width of a thin bar
    pub bar_thin_width: u32,

    /// Scale applied to every dimension
    pub factor: f32,

    /// Foreground color as 0xRRGGBB
    pub fore_color: u32,

    /// Background color as 0xRRGGBB
    pub background_color: u32,

    /// Rotation in degrees
    pub orientation: f32,

    /// Font size for the human-readable text
    pub font_size: f32,

    /// Draw a border around the barcode
    pub with_border: bool,

    /// Leave quiet zones on both sides
    pub with_quiet_zones: bool,

    /// Draw the human-readable text
    pub draw_text: bool,

    /// Spread the text over the full barcode width
    pub stretch_text: bool,

    /// Append a checksum to the encoded data
    pub with_checksum: bool,

    /// Show the checksum in the human-readable text
    pub with_checksum_in_text: bool,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        ObjectOptions {
            text: String::new(),
            bar_height: 50,
            bar_thick_width: 3,
            bar_thin_width: 1,
            factor: 1.0,
            fore_color: 0x000000,
            background_color: 0xFFFFFF,
            orientation: 0.0,
            font_size: 10.0,
            with_border: false,
            with_quiet_zones: true,
            draw_text: true,
            stretch_text: false,
            with_checksum: false,
            with_checksum_in_text: false,
        }
    }
}

impl ObjectOptions {
    /// Options with checksums enabled, as mandatory for the EAN/UPC family.
    pub fn with_mandatory_checksum() -> Self {
        ObjectOptions {
            with_checksum: true,
            with_checksum_in_text: true,
            ..Self::default()
        }
    }
}
