//! Configuration file support for plugin managers.
//!
//! Two configuration file locations are supported:
//! - Global: `~/.barcode/plugins.toml` - User-wide aliases
//! - Project: `.barcode/plugins.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! ```toml
//! shared_by_default = false
//!
//! [aliases]
//! barcode = "code128"
//! isbn = "ean13"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Plugin manager configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Requested sharing policy.
    ///
    /// Accepted under the legacy key `share_by_default` too. Managers never
    /// share instances, so `true` is ignored with a warning.
    #[serde(alias = "share_by_default", skip_serializing_if = "Option::is_none")]
    pub shared_by_default: Option<bool>,

    /// Extra aliases: alias -> existing alias or plugin identifier
    pub aliases: BTreeMap<String, String>,
}

impl ManagerConfig {
    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse plugin config")
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plugin config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse plugin config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist
    /// or can't be read.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load plugin config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("failed to serialize plugin config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write plugin config: {}", path.display()))?;

        Ok(())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ManagerConfig) {
        if other.shared_by_default.is_some() {
            self.shared_by_default = other.shared_by_default;
        }
        self.aliases.extend(other.aliases);
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.barcode/plugins.toml)
/// 2. Global config (~/.barcode/plugins.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> ManagerConfig {
    let mut config = ManagerConfig::default();

    if global_path.exists() {
        config.merge(ManagerConfig::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(ManagerConfig::load_or_default(project_path));
    }

    config
}

/// Get the global config directory (~/.barcode).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".barcode"))
}

/// Get the global plugin config path (~/.barcode/plugins.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("plugins.toml"))
}

/// Get the project plugin config path (.barcode/plugins.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".barcode").join("plugins.toml")
}
