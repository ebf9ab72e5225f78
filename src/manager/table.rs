//! Plugin table - the alias and factory tables a manager is built from.
//!
//! A table is plain configuration: construct it once, hand it to
//! [`PluginManager::new`](crate::manager::PluginManager::new), and let the
//! manager answer lookups against it.

use crate::manager::alias::AliasTable;
use crate::manager::factory::{Factory, FactoryTable};
use crate::manager::id::PluginId;

/// Alias table plus factory table.
#[derive(Debug, Clone, Default)]
pub struct PluginTable {
    aliases: AliasTable,
    factories: FactoryTable,
}

impl PluginTable {
    /// Create an empty table.
    pub fn new() -> Self {
        PluginTable {
            aliases: AliasTable::new(),
            factories: FactoryTable::new(),
        }
    }

    /// Add an alias (builder style).
    pub fn with_alias(mut self, alias: &str, id: impl Into<PluginId>) -> Self {
        self.insert_alias(alias, id);
        self
    }

    /// Add a factory (builder style).
    pub fn with_factory(mut self, id: impl Into<PluginId>, factory: Factory) -> Self {
        self.insert_factory(id, factory);
        self
    }

    /// Map an alias to an identifier.
    pub fn insert_alias(&mut self, alias: &str, id: impl Into<PluginId>) -> Option<PluginId> {
        self.aliases.insert(alias, id)
    }

    /// Register a factory under an identifier.
    pub fn insert_factory(&mut self, id: impl Into<PluginId>, factory: Factory) -> Option<Factory> {
        self.factories.insert(id, factory)
    }

    /// The alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The factory table.
    pub fn factories(&self) -> &FactoryTable {
        &self.factories
    }

    /// Resolve a name to an identifier.
    ///
    /// Aliases are tried first (case-insensitively), then the name is tried
    /// as an identifier with a registered factory.
    pub fn resolve(&self, name: &str) -> Option<&PluginId> {
        self.aliases
            .get(name)
            .or_else(|| self.factories.id(name))
    }

    /// Aliases whose identifier has no factory.
    ///
    /// An empty result means every alias can be constructed.
    pub fn check_consistency(&self) -> Vec<(String, PluginId)> {
        self.aliases
            .iter()
            .filter(|(_, id)| !self.factories.contains(id.as_str()))
            .map(|(alias, id)| (alias.to_string(), id.clone()))
            .collect()
    }
}
