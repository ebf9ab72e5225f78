//! User-friendly diagnostic messages.
//!
//! Every plugin error can be rendered with its root cause, the manager that
//! raised it, and a suggested fix.

use std::fmt;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a plugin cannot be resolved or built.
    pub const USE_ERROR_SENTINEL: &str =
        "Fall back to the `error` renderer to report the failure to the user";

    /// Suggestion when a factory produced a value of the wrong type.
    pub const CHECK_FACTORY_CONTRACT: &str =
        "Register the factory with a constructor that returns the manager's contract type";

    /// Suggestion when configuration asks for shared instances.
    pub const REMOVE_SHARING_FLAG: &str =
        "Remove `shared_by_default` from the config; every request builds a new object";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// ANSI color code for the label.
    fn color(self) -> &'static str {
        match self {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn with_severity(message: impl Into<String>, severity: Severity) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(message, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_severity(message, Severity::Warning)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Format the diagnostic for terminal output.
    ///
    /// With `color`, the severity and `help` labels are wrapped in ANSI
    /// escapes.
    pub fn format(&self, color: bool) -> String {
        let paint = |label: &str, code: &str| {
            if color {
                format!("\x1b[{}m{}\x1b[0m", code, label)
            } else {
                label.to_string()
            }
        };

        let mut lines = vec![format!(
            "{}: {}",
            paint(self.severity.label(), self.severity.color()),
            self.message
        )];
        lines.extend(self.context.iter().map(|ctx| format!("  -> {}", ctx)));

        if !self.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}: consider:", paint("help", "1;32")));
            lines.extend(
                self.suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, suggestion)| format!("  {}. {}", i + 1, suggestion)),
            );
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}
