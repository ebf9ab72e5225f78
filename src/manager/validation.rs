//! Contract validation for constructed plugins.
//!
//! Factories registered by identifier can produce any value. Before an
//! instance reaches the caller it is checked against the manager's contract:
//! the type-erased value must hold a `Box<C>`. Anything else is rejected with
//! [`PluginError::InvalidService`] and dropped.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use crate::manager::error::PluginError;
use crate::manager::factory::Instance;

/// The capability contract a manager enforces.
///
/// `C` is the contract object type, usually `dyn SomeTrait`.
pub struct Contract<C: ?Sized> {
    name: &'static str,
    _object: PhantomData<fn() -> Box<C>>,
}

impl<C: ?Sized + 'static> Contract<C> {
    /// Contract named after the type path of `C`.
    pub fn new() -> Self {
        Self::named(type_name::<C>())
    }

    /// Contract with an explicit display name.
    pub fn named(name: &'static str) -> Self {
        Contract {
            name,
            _object: PhantomData,
        }
    }

    /// Name reported in validation errors.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C: ?Sized + 'static> Default for Contract<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for Contract<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Contract<C> {}

impl<C: ?Sized> fmt::Debug for Contract<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Contract").field(&self.name).finish()
    }
}

/// Validate an instance against `contract`.
///
/// `registry` names the manager doing the check and is carried into the
/// error.
pub fn validate<C>(
    registry: &str,
    contract: &Contract<C>,
    instance: Instance,
) -> Result<Box<C>, PluginError>
where
    C: ?Sized + Send + 'static,
{
    let (value, concrete) = instance.into_parts();
    match value.downcast::<Box<C>>() {
        Ok(object) => Ok(*object),
        Err(value) => Err(PluginError::InvalidService {
            registry: registry.to_string(),
            expected: contract.name().to_string(),
            actual: value_kind(value.as_ref())
                .unwrap_or(concrete)
                .to_string(),
        }),
    }
}

/// Validate an instance against `contract`.
///
/// Older call sites use this name; it forwards to [`validate`].
pub fn validate_plugin<C>(
    registry: &str,
    contract: &Contract<C>,
    instance: Instance,
) -> Result<Box<C>, PluginError>
where
    C: ?Sized + Send + 'static,
{
    validate(registry, contract, instance)
}

/// Kind name for plain data values.
///
/// Returns `None` for anything that is not a scalar, string, or unit, in
/// which case the concrete type name is reported instead.
pub fn value_kind(value: &(dyn Any + Send)) -> Option<&'static str> {
    macro_rules! is_any {
        ($($ty:ty),+) => {
            false $(|| value.is::<$ty>())+
        };
    }

    if is_any!(bool) {
        Some("boolean")
    } else if is_any!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize) {
        Some("integer")
    } else if is_any!(f32, f64) {
        Some("double")
    } else if is_any!(String, &'static str, char) {
        Some("string")
    } else if is_any!(()) {
        Some("NULL")
    } else {
        None
    }
}
