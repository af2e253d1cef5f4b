//! Configuration file loading and layering.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults ([`PublisherConfig::default`])
//! 2. TOML config file (`--config`, `NOTEPUB_CONFIG`, or the default path)
//! 3. Environment variables and command-line flags
//!
//! ```toml
//! [paths]
//! notes_dir = "~/Notes"
//! assets_target = "docs/posts/assets"
//! now_target = "docs/now"
//! ```

use std::path::{Path, PathBuf};

use notepub_core::{expand_tilde, Error, Result};
use notepub_publish::PublisherConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Project name used for the default config location.
pub const PROJECT_NAME: &str = "notepub";
/// File name of the default config file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of a notepub config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Notes root and link destinations.
    pub paths: PublisherConfig,
}

impl CliConfig {
    /// Default config file location: `<config_dir>/notepub/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present, otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::not_found(path.to_string_lossy(), "config file"));
                }
                path.to_path_buf()
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.paths.notes_dir = expand_path(&config.paths.notes_dir);
        config.paths.assets_target = expand_path(&config.paths.assets_target);
        config.paths.now_target = expand_path(&config.paths.now_target);
        Ok(config)
    }

    /// Apply flag and environment overrides from `args`.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(dir) = &args.notes_dir {
            self.paths.notes_dir = expand_path(dir);
        }
        if let Some(dir) = &args.assets_target {
            self.paths.assets_target = expand_path(dir);
        }
        if let Some(dir) = &args.now_target {
            self.paths.now_target = expand_path(dir);
        }
        self
    }

    /// The publisher configuration.
    pub fn publisher(&self) -> PublisherConfig {
        self.paths.clone()
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_tilde(s),
        None => path.to_path_buf(),
    }
}
