//! Plugin manager core.
//!
//! This module provides a name-keyed registry where plugin implementations
//! are registered as factories, resolved through a case-insensitive alias
//! table, and validated against a capability contract before they are handed
//! to the caller.
//!
//! # Architecture
//!
//! ```text
//!                       ┌─────────────────┐
//!                       │  get("EAN13")   │ (caller wants)
//!                       └────────┬────────┘
//!                                ▼
//!                       ┌─────────────────┐
//!                       │   AliasTable    │ ean13 -> PluginId
//!                       └────────┬────────┘
//!                                ▼
//!                       ┌─────────────────┐
//!                       │  FactoryTable   │ PluginId -> Factory
//!                       └────────┬────────┘
//!                                ▼
//!                       ┌─────────────────┐
//!                       │    validate     │ Instance -> Box<C>
//!                       └────────┬────────┘
//!                                ▼
//!                          fresh instance
//! ```
//!
//! # Key Concepts
//!
//! - **PluginId** - Canonical implementation identifier (in `id.rs`)
//! - **AliasTable** - Case-insensitive symbolic names (in `alias.rs`)
//! - **Factory** - Zero-argument constructors (in `factory.rs`)
//! - **PluginTable** - Aliases plus factories, built once (in `table.rs`)
//! - **Contract** - The capability every product must satisfy (in `validation.rs`)
//! - **PluginManager** - Resolution, construction and validation (in `registry.rs`)
//!
//! # Usage
//!
//! ```ignore
//! use barcode_plugins::manager::{Contract, Factory, PluginManager, PluginTable};
//!
//! let mut table = PluginTable::new();
//! table.insert_factory("my::Widget", Factory::invokable::<dyn Widget, MyWidget>());
//! table.insert_alias("widget", "my::Widget");
//!
//! let manager = PluginManager::new("WidgetManager", Contract::<dyn Widget>::new(), table);
//! let widget = manager.get("Widget")?;
//! ```

pub mod alias;
pub mod error;
pub mod factory;
pub mod id;
pub mod registry;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use alias::{normalize_alias, AliasTable};
pub use error::PluginError;
pub use factory::{ConstructionError, Factory, FactoryTable, Implements, Instance};
pub use id::PluginId;
pub use registry::PluginManager;
pub use table::PluginTable;
pub use validation::{validate, validate_plugin, value_kind, Contract};
