//! Plugin manager error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::manager::factory::ConstructionError;
use crate::manager::id::PluginId;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error raised while getting a plugin from a manager.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum PluginError {
    #[error("{registry} was unable to resolve `{name}` to a plugin factory")]
    #[diagnostic(code(barcode_plugins::unknown_plugin))]
    UnknownPlugin {
        registry: String,
        name: String,
        similar: Vec<String>,
    },

    #[error("{registry} failed to construct `{id}`")]
    #[diagnostic(code(barcode_plugins::construction_failed))]
    ConstructionFailed {
        registry: String,
        id: PluginId,
        #[source]
        source: ConstructionError,
    },

    #[error("{registry} can only create instances of {expected}; {actual} is invalid")]
    #[diagnostic(
        code(barcode_plugins::invalid_service),
        help("The factory is registered under the wrong contract")
    )]
    InvalidService {
        registry: String,
        expected: String,
        actual: String,
    },
}

impl PluginError {
    /// Name of the manager that raised the error.
    pub fn registry(&self) -> &str {
        match self {
            PluginError::UnknownPlugin { registry, .. }
            | PluginError::ConstructionFailed { registry, .. }
            | PluginError::InvalidService { registry, .. } => registry,
        }
    }

    /// Whether a retry against another name could succeed.
    ///
    /// Only unknown names are recoverable; the other variants point at a
    /// broken registration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PluginError::UnknownPlugin { .. })
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PluginError::UnknownPlugin {
                registry,
                name,
                similar,
            } => {
                let mut diag = Diagnostic::error(format!("unknown plugin `{}`", name))
                    .with_context(format!("{} has no alias or identifier named `{}`", registry, name));

                if !similar.is_empty() {
                    diag = diag.with_suggestion(format!(
                        "Did you mean: {}",
                        similar
                            .iter()
                            .map(|s| format!("`{}`", s))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }

                diag.with_suggestion(suggestions::USE_ERROR_SENTINEL)
            }

            PluginError::ConstructionFailed {
                registry,
                id,
                source,
            } => Diagnostic::error(format!("failed to construct `{}`", id))
                .with_context(format!("{} invoked the factory for `{}`", registry, id))
                .with_context(format!("caused by: {}", source))
                .with_suggestion(suggestions::USE_ERROR_SENTINEL),

            PluginError::InvalidService {
                registry,
                expected,
                actual,
            } => Diagnostic::error(format!("`{}` is not a valid plugin", actual))
                .with_context(format!("{} can only create instances of {}", registry, expected))
                .with_suggestion(suggestions::CHECK_FACTORY_CONTRACT),
        }
    }
}
