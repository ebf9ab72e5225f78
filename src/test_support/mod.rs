//! Test utilities for plugin manager unit tests.
//!
//! Provides fixture plugins and a counting factory that records how often
//! the manager invoked it.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{label_table, CountingFactory, PlainLabel};
//!
//! let counter = CountingFactory::<dyn Label, PlainLabel>::new();
//! let mut table = label_table();
//! table.insert_factory("counted", counter.factory());
//! ```

pub mod fixtures;

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::manager::{Factory, Implements};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Factory wrapper counting constructor invocations.
pub struct CountingFactory<C: ?Sized, T> {
    calls: Arc<AtomicUsize>,
    _types: PhantomData<fn() -> (Box<C>, T)>,
}

impl<C, T> CountingFactory<C, T>
where
    C: ?Sized + Send + 'static,
    T: Default + Implements<C> + 'static,
{
    /// Create a counter with zero calls.
    pub fn new() -> Self {
        CountingFactory {
            calls: Arc::new(AtomicUsize::new(0)),
            _types: PhantomData,
        }
    }

    /// A factory building `T::default()` and bumping the counter.
    pub fn factory(&self) -> Factory {
        let calls = Arc::clone(&self.calls);
        let inner = Factory::invokable::<C, T>();
        Factory::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            inner.create()
        })
    }

    /// Number of times the factory has run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_factory_counts() {
        let counter = CountingFactory::<dyn Label, PlainLabel>::new();
        let factory = counter.factory();

        factory.create().unwrap();
        factory.create().unwrap();
        assert_eq!(counter.calls(), 2);
    }
}
