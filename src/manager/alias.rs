//! Alias table - symbolic names for plugin identifiers.
//!
//! Aliases are case-insensitive. They are normalized on insert and on lookup,
//! so `EAN13`, `Ean13` and `ean13` all name the same entry.

use std::collections::BTreeMap;

use crate::manager::id::PluginId;

/// Normalize an alias for storage and lookup.
pub fn normalize_alias(name: &str) -> String {
    name.to_lowercase()
}

/// Many-to-one mapping from alias to plugin identifier.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: BTreeMap<String, PluginId>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        AliasTable {
            aliases: BTreeMap::new(),
        }
    }

    /// Map `alias` to `id`, returning the identifier it previously named.
    pub fn insert(&mut self, alias: &str, id: impl Into<PluginId>) -> Option<PluginId> {
        self.aliases.insert(normalize_alias(alias), id.into())
    }

    /// Remove an alias.
    pub fn remove(&mut self, alias: &str) -> Option<PluginId> {
        self.aliases.remove(&normalize_alias(alias))
    }

    /// Look up the identifier an alias names.
    pub fn get(&self, alias: &str) -> Option<&PluginId> {
        self.aliases.get(&normalize_alias(alias))
    }

    /// Check if an alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }

    /// All `(alias, identifier)` pairs, ordered by alias.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PluginId)> + '_ {
        self.aliases.iter().map(|(alias, id)| (alias.as_str(), id))
    }

    /// All aliases naming `id`.
    pub fn aliases_of<'a>(&'a self, id: &'a PluginId) -> impl Iterator<Item = &'a str> + 'a {
        self.aliases
            .iter()
            .filter(move |(_, target)| *target == id)
            .map(|(alias, _)| alias.as_str())
    }

    /// Get the number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
