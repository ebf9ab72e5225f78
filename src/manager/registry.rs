//! Plugin manager - resolves names, builds plugins, validates them.
//!
//! Key principle: nothing is shared. Every successful `get` runs the
//! factory again and hands the caller a new, independently owned instance.
//! The manager keeps no reference to what it builds.

use std::collections::BTreeMap;
use std::fmt;

use crate::manager::alias::normalize_alias;
use crate::manager::error::PluginError;
use crate::manager::factory::{Factory, Implements, Instance};
use crate::manager::id::PluginId;
use crate::manager::table::PluginTable;
use crate::manager::validation::{self, Contract};
use crate::util::config::ManagerConfig;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Maximum number of similar names carried by an `UnknownPlugin` error.
const MAX_SIMILAR: usize = 3;

/// Registry of plugin factories for the contract `C`.
///
/// `get` takes `&self` and can be called from any number of threads at once.
/// Registration methods take `&mut self`; callers that need to register
/// after sharing the manager wrap it in a lock.
pub struct PluginManager<C: ?Sized> {
    name: String,
    contract: Contract<C>,
    table: PluginTable,
}

impl<C: ?Sized + Send + 'static> PluginManager<C> {
    /// Create a manager over an existing table.
    ///
    /// `name` identifies the manager in error messages.
    pub fn new(name: impl Into<String>, contract: Contract<C>, table: PluginTable) -> Self {
        let manager = PluginManager {
            name: name.into(),
            contract,
            table,
        };

        for (alias, id) in manager.table.check_consistency() {
            tracing::warn!(
                "{}: alias `{}` points at `{}`, which has no factory",
                manager.name,
                alias,
                id
            );
        }

        manager
    }

    /// Name of this manager.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contract every plugin must satisfy.
    pub fn contract(&self) -> &Contract<C> {
        &self.contract
    }

    /// The underlying alias and factory tables.
    pub fn table(&self) -> &PluginTable {
        &self.table
    }

    /// Whether plugins are shared between `get` calls.
    ///
    /// Always `false`: each call returns a fresh instance.
    pub fn shared_by_default(&self) -> bool {
        false
    }

    /// Get a new plugin instance by alias or identifier.
    pub fn get(&self, name: &str) -> Result<Box<C>, PluginError> {
        let id = self.resolve(name)?;
        let instance = self.create(&id)?;
        self.validate(instance)
    }

    /// Check if `name` resolves to a plugin with a registered factory.
    pub fn has(&self, name: &str) -> bool {
        self.table
            .resolve(name)
            .is_some_and(|id| self.table.factories().contains(id.as_str()))
    }

    /// Resolve a name to its canonical identifier.
    ///
    /// Aliases are matched case-insensitively; failing that, the name is
    /// tried as an identifier.
    pub fn resolve(&self, name: &str) -> Result<PluginId, PluginError> {
        if let Some(id) = self.table.aliases().get(name) {
            tracing::debug!("{}: resolved alias `{}` to `{}`", self.name, name, id);
            return Ok(id.clone());
        }

        match self.table.factories().id(name) {
            Some(id) => {
                tracing::debug!("{}: `{}` is a plugin identifier", self.name, name);
                Ok(id.clone())
            }
            None => Err(self.unknown(name)),
        }
    }

    /// Invoke the factory registered for `id`.
    pub fn create(&self, id: &PluginId) -> Result<Instance, PluginError> {
        let factory = self
            .table
            .factories()
            .get(id.as_str())
            .ok_or_else(|| self.unknown(id.as_str()))?;

        let instance = factory
            .create()
            .map_err(|source| PluginError::ConstructionFailed {
                registry: self.name.clone(),
                id: id.clone(),
                source,
            })?;

        tracing::debug!("{}: constructed `{}`", self.name, instance.type_name());
        Ok(instance)
    }

    /// Validate an instance against this manager's contract.
    pub fn validate(&self, instance: Instance) -> Result<Box<C>, PluginError> {
        validation::validate(&self.name, &self.contract, instance)
    }

    /// Validate an instance against this manager's contract.
    ///
    /// Forwards to [`PluginManager::validate`].
    pub fn validate_plugin(&self, instance: Instance) -> Result<Box<C>, PluginError> {
        self.validate(instance)
    }

    /// Map `alias` to whatever `target` resolves to.
    ///
    /// A target that is neither an alias nor a registered identifier is
    /// taken as an identifier whose factory will be registered later.
    pub fn set_alias(&mut self, alias: &str, target: &str) {
        let id = self
            .table
            .resolve(target)
            .cloned()
            .unwrap_or_else(|| PluginId::new(target));

        if let Some(previous) = self.table.insert_alias(alias, id.clone()) {
            if previous != id {
                tracing::debug!(
                    "{}: alias `{}` now points at `{}` (was `{}`)",
                    self.name,
                    alias,
                    id,
                    previous
                );
            }
        }
    }

    /// Register a factory, replacing any previous factory for `id`.
    pub fn set_factory(&mut self, id: impl Into<PluginId>, factory: Factory) {
        let id = id.into();
        if self.table.insert_factory(id.clone(), factory).is_some() {
            tracing::debug!("{}: replaced factory for `{}`", self.name, id);
        }
    }

    /// Register `T` under its type path with a `T::default()` factory, and
    /// alias it as `alias`.
    pub fn set_invokable<T>(&mut self, alias: &str) -> PluginId
    where
        T: Default + Implements<C> + 'static,
    {
        let id = PluginId::of::<T>();
        self.set_factory(id.clone(), Factory::invokable::<C, T>());
        self.table.insert_alias(alias, id.clone());
        id
    }

    /// Apply configuration on top of the current tables.
    ///
    /// Alias targets may name other aliases from the same config, in any
    /// order. Nothing is applied unless every target resolves; on failure
    /// the error names the first target that could not be resolved.
    pub fn configure(&mut self, config: &ManagerConfig) -> Result<(), PluginError> {
        if config.shared_by_default == Some(true) {
            tracing::warn!("{}", self.sharing_ignored());
        }

        let staged = self.stage_aliases(config)?;
        for (alias, id) in staged {
            self.table.insert_alias(&alias, id);
        }

        Ok(())
    }

    /// Resolve every configured alias without touching the tables.
    ///
    /// Targets naming a configured alias wait for that alias to resolve;
    /// passes repeat until one makes no progress.
    fn stage_aliases(
        &self,
        config: &ManagerConfig,
    ) -> Result<Vec<(String, PluginId)>, PluginError> {
        let configured: BTreeMap<String, &str> = config
            .aliases
            .iter()
            .map(|(alias, target)| (normalize_alias(alias), target.as_str()))
            .collect();

        let mut staged: BTreeMap<String, PluginId> = BTreeMap::new();
        let mut pending: Vec<(&String, &str)> = configured
            .iter()
            .map(|(alias, target)| (alias, *target))
            .collect();

        while !pending.is_empty() {
            let before = pending.len();

            pending.retain(|&(alias, target)| {
                let key = normalize_alias(target);
                let id = if configured.contains_key(&key) {
                    staged.get(&key).cloned()
                } else {
                    self.table.resolve(target).cloned()
                };

                match id {
                    Some(id) => {
                        staged.insert(alias.clone(), id);
                        false
                    }
                    None => true,
                }
            });

            if pending.len() == before {
                break;
            }
        }

        match pending.first() {
            Some(&(_, target)) => Err(self.unknown(target)),
            None => Ok(staged.into_iter().collect()),
        }
    }

    fn sharing_ignored(&self) -> Diagnostic {
        Diagnostic::warning("ignoring `shared_by_default = true`")
            .with_context(format!("{} never shares plugin instances", self.name))
            .with_suggestion(suggestions::REMOVE_SHARING_FLAG)
    }

    /// All `(alias, identifier)` pairs, ordered by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &PluginId)> + '_ {
        self.table.aliases().iter()
    }

    /// All identifiers with a registered factory.
    pub fn ids(&self) -> impl Iterator<Item = &PluginId> + '_ {
        self.table.factories().ids()
    }

    /// Get the number of registered factories.
    pub fn len(&self) -> usize {
        self.table.factories().len()
    }

    /// Check if the manager has no factories.
    pub fn is_empty(&self) -> bool {
        self.table.factories().is_empty()
    }

    fn unknown(&self, name: &str) -> PluginError {
        PluginError::UnknownPlugin {
            registry: self.name.clone(),
            name: name.to_string(),
            similar: self.similar_aliases(name),
        }
    }

    /// Aliases sharing the longest prefix with `name`.
    fn similar_aliases(&self, name: &str) -> Vec<String> {
        let wanted = normalize_alias(name);
        let mut scored: Vec<(usize, &str)> = self
            .table
            .aliases()
            .iter()
            .map(|(alias, _)| (common_prefix_len(&wanted, alias), alias))
            .filter(|(score, _)| *score >= 3)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SIMILAR)
            .map(|(_, alias)| alias.to_string())
            .collect()
    }
}

impl<C: ?Sized> fmt::Debug for PluginManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginManager")
            .field("name", &self.name)
            .field("contract", &self.contract)
            .field("table", &self.table)
            .finish()
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn manager() -> PluginManager<dyn Label> {
        PluginManager::new("LabelManager", Contract::new(), label_table())
    }

    #[test]
    fn test_get_by_alias_and_id() {
        let manager = manager();

        let by_alias = manager.get("plain").unwrap();
        assert_eq!(by_alias.label(), "plain");

        let id = PluginId::of::<PlainLabel>();
        let by_id = manager.get(id.as_str()).unwrap();
        assert_eq!(by_id.label(), "plain");
    }

    #[test]
    fn test_get_is_case_insensitive_for_aliases() {
        let manager = manager();
        assert_eq!(manager.resolve("PLAIN").unwrap(), manager.resolve("plain").unwrap());
        assert!(manager.get("Plain").is_ok());
    }

    #[test]
    fn test_unknown_name() {
        let err = manager().get("plane").err().unwrap();
        match err {
            PluginError::UnknownPlugin { registry, name, similar } => {
                assert_eq!(registry, "LabelManager");
                assert_eq!(name, "plane");
                assert_eq!(similar, vec!["plain".to_string()]);
            }
            other => panic!("expected UnknownPlugin, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_alias_is_unknown_plugin() {
        let mut manager = manager();
        manager.set_alias("ghost", "fixtures::Ghost");

        assert!(!manager.has("ghost"));
        assert!(matches!(
            manager.get("ghost"),
            Err(PluginError::UnknownPlugin { ref name, .. }) if name == "fixtures::Ghost"
        ));
    }

    #[test]
    fn test_construction_failure_is_distinct() {
        let mut manager = manager();
        manager.set_factory("fixtures::Broken", failing_factory("font file missing"));

        let err = manager.get("fixtures::Broken").err().unwrap();
        assert!(matches!(err, PluginError::ConstructionFailed { .. }));
        assert!(!err.is_recoverable());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "font file missing");
    }

    #[test]
    fn test_invalid_service() {
        let mut manager = manager();
        manager.set_factory("fixtures::NotALabel", not_a_plugin_factory());
        manager.set_alias("bogus", "fixtures::NotALabel");

        let err = manager.get("bogus").err().unwrap();
        let message = err.to_string();
        assert!(message.starts_with("LabelManager can only create instances of"));
        assert!(message.contains("Label"));
        assert!(message.contains("NotAPlugin"));
    }

    #[test]
    fn test_validate_and_proxy_agree() {
        let manager = manager();

        let primary = manager.validate(Instance::new(NotAPlugin::default())).err().unwrap();
        let proxy = manager
            .validate_plugin(Instance::new(NotAPlugin::default()))
            .err()
            .unwrap();

        assert_eq!(primary.to_string(), proxy.to_string());
    }

    #[test]
    fn test_instances_are_not_shared() {
        let manager = manager();
        assert!(!manager.shared_by_default());

        let mut first = manager.get("plain").unwrap();
        let second = manager.get("plain").unwrap();

        first.set_label("changed");
        assert_eq!(first.label(), "changed");
        assert_eq!(second.label(), "plain");
    }

    #[test]
    fn test_factory_runs_on_every_get() {
        let counter = CountingFactory::<dyn Label, PlainLabel>::new();
        let mut manager = manager();
        manager.set_factory("fixtures::Counted", counter.factory());

        for _ in 0..3 {
            manager.get("fixtures::Counted").unwrap();
        }
        assert_eq!(counter.calls(), 3);
    }

    #[test]
    fn test_set_invokable() {
        let mut manager = PluginManager::<dyn Label>::new("LabelManager", Contract::new(), PluginTable::new());
        let id = manager.set_invokable::<FancyLabel>("fancy");

        assert_eq!(id, PluginId::of::<FancyLabel>());
        assert!(manager.has("FANCY"));
        assert_eq!(manager.get("fancy").unwrap().label(), "*fancy*");
    }

    #[test]
    fn test_set_alias_follows_existing_alias() {
        let mut manager = manager();
        manager.set_alias("simple", "PLAIN");

        assert_eq!(manager.resolve("simple").unwrap(), PluginId::of::<PlainLabel>());
    }

    #[test]
    fn test_configure_applies_aliases() {
        let mut manager = manager();
        let mut config = ManagerConfig::default();
        config.aliases.insert("Basic".to_string(), "plain".to_string());
        config.shared_by_default = Some(true);

        manager.configure(&config).unwrap();

        assert!(manager.has("basic"));
        assert!(!manager.shared_by_default());
    }

    #[test]
    fn test_configure_rejects_unknown_target() {
        let mut manager = manager();
        let mut config = ManagerConfig::default();
        config.aliases.insert("basic".to_string(), "plain".to_string());
        config.aliases.insert("zz".to_string(), "nowhere".to_string());

        match manager.configure(&config) {
            Err(PluginError::UnknownPlugin { name, .. }) => assert_eq!(name, "nowhere"),
            other => panic!("expected UnknownPlugin, got {:?}", other.err()),
        }
        assert!(!manager.has("basic"));
        assert!(!manager.has("zz"));
    }

    #[test]
    fn test_configure_resolves_chains_in_any_order() {
        let mut manager = manager();
        let mut config = ManagerConfig::default();
        config.aliases.insert("alpha".to_string(), "Middle".to_string());
        config.aliases.insert("middle".to_string(), "zip".to_string());
        config.aliases.insert("zip".to_string(), "fancy".to_string());

        manager.configure(&config).unwrap();

        for alias in ["alpha", "middle", "zip"] {
            assert_eq!(manager.resolve(alias).unwrap(), PluginId::of::<FancyLabel>());
        }
    }

    #[test]
    fn test_configure_rejects_alias_cycle() {
        let mut manager = manager();
        let mut config = ManagerConfig::default();
        config.aliases.insert("ping".to_string(), "pong".to_string());
        config.aliases.insert("pong".to_string(), "ping".to_string());
        config.aliases.insert("simple".to_string(), "plain".to_string());

        assert!(matches!(
            manager.configure(&config),
            Err(PluginError::UnknownPlugin { .. })
        ));
        assert!(!manager.has("simple"));
    }

    #[test]
    fn test_configured_alias_shadows_existing_one() {
        let mut manager = manager();
        let mut config = ManagerConfig::default();
        config.aliases.insert("basic".to_string(), "plain".to_string());
        config.aliases.insert("plain".to_string(), "fancy".to_string());

        manager.configure(&config).unwrap();

        assert_eq!(manager.resolve("plain").unwrap(), PluginId::of::<FancyLabel>());
        assert_eq!(manager.resolve("basic").unwrap(), PluginId::of::<FancyLabel>());
    }

    #[test]
    fn test_sharing_ignored_diagnostic() {
        let output = manager().sharing_ignored().format(false);
        assert!(output.starts_with("warning: ignoring `shared_by_default = true`"));
        assert!(output.contains("LabelManager never shares plugin instances"));
    }

    #[test]
    fn test_enumeration() {
        let manager = manager();
        assert_eq!(manager.len(), 2);
        assert!(!manager.is_empty());
        assert!(manager.ids().any(|id| *id == PluginId::of::<FancyLabel>()));
        assert!(manager.aliases().any(|(alias, _)| alias == "plain"));
    }

    #[test]
    fn test_concurrent_get() {
        let manager = manager();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        assert_eq!(manager.get("plain").unwrap().label(), "plain");
                    }
                });
            }
        });
    }
}
