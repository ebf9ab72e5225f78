//! Canonical plugin identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical identifier naming one concrete plugin implementation.
///
/// Built-in identifiers are the Rust type paths of the implementing types
/// (see [`PluginId::of`]), but any string may be used for plugins registered
/// by hand. Identifiers are compared exactly; only aliases are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(String);

impl PluginId {
    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        PluginId(id.into())
    }

    /// Identifier for the type `T`, derived from its type path.
    pub fn of<T: ?Sized + 'static>() -> Self {
        PluginId(std::any::type_name::<T>().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PluginId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PluginId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginId {
    fn from(s: &str) -> Self {
        PluginId(s.to_string())
    }
}

impl From<String> for PluginId {
    fn from(s: String) -> Self {
        PluginId(s)
    }
}

impl From<&PluginId> for PluginId {
    fn from(id: &PluginId) -> Self {
        id.clone()
    }
}
