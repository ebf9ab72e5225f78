//! Shared utilities

pub mod config;
pub mod diagnostic;

pub use config::ManagerConfig;
pub use diagnostic::Diagnostic;
