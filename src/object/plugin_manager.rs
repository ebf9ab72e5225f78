//! Plugin manager for barcode objects.
//!
//! Resolves symbology names to the built-in barcode objects and enforces
//! that everything it returns is a [`BarcodeObject`]. Objects are never
//! shared: two requests for `code128` produce two independent objects.

use crate::manager::{Contract, Factory, PluginId, PluginManager, PluginTable};
use crate::object::builtins::*;
use crate::object::BarcodeObject;

/// Name the object manager reports in errors.
pub const OBJECT_MANAGER_NAME: &str = "ObjectPluginManager";

/// Alias of the renderer used to report failures.
pub const ERROR_SENTINEL: &str = "error";

/// Aliases registered by default, one per built-in object.
pub const DEFAULT_ALIASES: &[&str] = &[
    "codabar",
    "code128",
    "code25",
    "code25interleaved",
    "code39",
    "ean13",
    "ean2",
    "ean5",
    "ean8",
    ERROR_SENTINEL,
    "identcode",
    "itf14",
    "leitcode",
    "planet",
    "postnet",
    "royalmail",
    "upca",
    "upce",
];

/// Plugin manager producing boxed [`BarcodeObject`]s.
pub type ObjectPluginManager = PluginManager<dyn BarcodeObject>;

fn register<T>(table: &mut PluginTable, alias: &str)
where
    T: BarcodeObject + Default + 'static,
{
    let id = PluginId::of::<T>();
    table.insert_factory(id.clone(), Factory::invokable::<dyn BarcodeObject, T>());
    table.insert_alias(alias, id);
}

/// The default alias and factory tables for barcode objects.
pub fn default_table() -> PluginTable {
    let mut table = PluginTable::new();

    register::<Codabar>(&mut table, "codabar");
    register::<Code128>(&mut table, "code128");
    register::<Code25>(&mut table, "code25");
    register::<Code25interleaved>(&mut table, "code25interleaved");
    register::<Code39>(&mut table, "code39");
    register::<Ean13>(&mut table, "ean13");
    register::<Ean2>(&mut table, "ean2");
    register::<Ean5>(&mut table, "ean5");
    register::<Ean8>(&mut table, "ean8");
    register::<ErrorObject>(&mut table, ERROR_SENTINEL);
    register::<Identcode>(&mut table, "identcode");
    register::<Itf14>(&mut table, "itf14");
    register::<Leitcode>(&mut table, "leitcode");
    register::<Planet>(&mut table, "planet");
    register::<Postnet>(&mut table, "postnet");
    register::<Royalmail>(&mut table, "royalmail");
    register::<Upca>(&mut table, "upca");
    register::<Upce>(&mut table, "upce");

    table
}

impl PluginManager<dyn BarcodeObject> {
    /// Create an object manager over the default table.
    pub fn with_defaults() -> Self {
        Self::with_table(default_table())
    }

    /// Create an object manager over a custom table.
    pub fn with_table(table: PluginTable) -> Self {
        PluginManager::new(OBJECT_MANAGER_NAME, Contract::new(), table)
    }
}

impl Default for PluginManager<dyn BarcodeObject> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
