//! Plugin factories and the instances they produce.
//!
//! A factory is a zero-argument constructor. It is invoked once per request
//! and never caches what it builds.

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::manager::id::PluginId;

/// Error raised by a plugin constructor.
pub type ConstructionError = Box<dyn std::error::Error + Send + Sync>;

type Constructor = dyn Fn() -> Result<Instance, ConstructionError> + Send + Sync;

/// Upcast from a concrete plugin type to the contract object `C`.
///
/// Implemented by the contract's owner, typically as a blanket impl over
/// every type implementing the contract trait.
pub trait Implements<C: ?Sized> {
    /// Convert the boxed concrete value into a boxed contract object.
    fn upcast(self: Box<Self>) -> Box<C>;
}

/// A freshly constructed, not yet validated plugin value.
///
/// The value is type-erased. It satisfies contract `C` only if it holds a
/// `Box<C>`; anything else is rejected at validation time.
pub struct Instance {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl Instance {
    /// Wrap an arbitrary value as-is.
    ///
    /// The value is not upcast, so it only validates against a contract `C`
    /// when `T` is `Box<C>` itself. Plugin types go through
    /// [`Instance::plugin`] or [`Factory::invokable`] instead.
    pub fn new<T: Any + Send>(value: T) -> Self {
        Instance {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Upcast a plugin value to the contract object `C` and wrap it.
    pub fn plugin<C, T>(value: T) -> Self
    where
        C: ?Sized + Send + 'static,
        T: Implements<C> + 'static,
    {
        let object = <T as Implements<C>>::upcast(Box::new(value));
        Instance::object::<C>(object, type_name::<T>())
    }

    /// Wrap a value already upcast to the contract object `C`.
    ///
    /// `type_name` names the concrete type behind the object.
    pub fn object<C: ?Sized + Send + 'static>(object: Box<C>, type_name: &'static str) -> Self {
        Instance {
            value: Box::new(object),
            type_name,
        }
    }

    /// Concrete type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn into_parts(self) -> (Box<dyn Any + Send>, &'static str) {
        (self.value, self.type_name)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Zero-argument plugin constructor.
#[derive(Clone)]
pub struct Factory {
    constructor: Arc<Constructor>,
}

impl Factory {
    /// Create a factory from a constructor closure.
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn() -> Result<Instance, ConstructionError> + Send + Sync + 'static,
    {
        Factory {
            constructor: Arc::new(constructor),
        }
    }

    /// Factory building `T::default()` and upcasting it to the contract `C`.
    pub fn invokable<C, T>() -> Self
    where
        C: ?Sized + Send + 'static,
        T: Default + Implements<C> + 'static,
    {
        Factory::new(|| Ok(Instance::plugin::<C, T>(T::default())))
    }

    /// Invoke the constructor.
    pub fn create(&self) -> Result<Instance, ConstructionError> {
        (self.constructor)()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}

/// Factory entries keyed by plugin identifier.
#[derive(Debug, Clone, Default)]
pub struct FactoryTable {
    factories: BTreeMap<PluginId, Factory>,
}

impl FactoryTable {
    /// Create an empty factory table.
    pub fn new() -> Self {
        FactoryTable {
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory, replacing any previous one for `id`.
    pub fn insert(&mut self, id: impl Into<PluginId>, factory: Factory) -> Option<Factory> {
        self.factories.insert(id.into(), factory)
    }

    /// Look up the factory for an identifier.
    pub fn get(&self, id: &str) -> Option<&Factory> {
        self.factories.get(id)
    }

    /// Look up the stored identifier matching `id` exactly.
    pub fn id(&self, id: &str) -> Option<&PluginId> {
        self.factories.get_key_value(id).map(|(id, _)| id)
    }

    /// Check if an identifier has a factory.
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// All registered identifiers, in order.
    pub fn ids(&self) -> impl Iterator<Item = &PluginId> + '_ {
        self.factories.keys()
    }

    /// Get the number of factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
