//! barcode-plugins - typed plugin registry for barcode renderer objects
//!
//! This crate resolves symbology names such as `code128` or `ean13` to
//! barcode object implementations, constructs a fresh object per request,
//! and validates every product against the [`BarcodeObject`] contract.
//!
//! ```
//! use barcode_plugins::{BarcodeObject, ObjectPluginManager};
//!
//! let manager = ObjectPluginManager::with_defaults();
//! let mut object = manager.get("EAN13").unwrap();
//! object.set_text("400638133393");
//! assert_eq!(object.barcode_type(), "ean13");
//! ```

pub mod manager;
pub mod object;
pub mod util;

/// Test fixtures and mocks for unit tests.
///
/// Only available when compiling tests.
#[cfg(test)]
pub mod test_support;

pub use manager::{Contract, Factory, Instance, PluginError, PluginId, PluginManager, PluginTable};
pub use object::{BarcodeObject, ObjectOptions, ObjectPluginManager};
pub use util::config::ManagerConfig;
