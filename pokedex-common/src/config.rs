//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (clap also folds in environment variables)
//! 2. TOML config file
//! 3. Compiled default

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::records::{bundled_records, load_records, Record};
use crate::{Error, Result};

/// Default listen address for the gallery server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5780";

/// Default tracing directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub bind_address: Option<String>,
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Values supplied on the command line (or via their environment fallbacks)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved gallery configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub bind_address: String,
    /// `None` means use the bundled record data
    pub data_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            data_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Merge CLI values over TOML values over compiled defaults
    pub fn resolve(cli: &CliOverrides, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            bind_address: cli
                .bind_address
                .clone()
                .or(file.bind_address)
                .unwrap_or(defaults.bind_address),
            data_file: cli.data_file.clone().or(file.data_file),
            log_level: cli
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Read the config file (explicit path, else the platform default) and
    /// resolve against the CLI values
    ///
    /// An explicitly requested config file must exist; the platform default
    /// is allowed to be missing.
    pub fn load(cli: &CliOverrides, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => match load_toml_config(path)? {
                Some(config) => Some(config),
                None => {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )))
                }
            },
            None => match default_config_path() {
                Some(path) => load_toml_config(&path)?,
                None => None,
            },
        };

        Ok(Self::resolve(cli, file.as_ref()))
    }

    /// Load the record set this configuration points at
    pub fn load_records(&self) -> Result<Vec<Record>> {
        match &self.data_file {
            Some(path) => {
                info!("Loading records from {}", path.display());
                load_records(path)
            }
            None => {
                info!("Loading bundled records");
                bundled_records()
            }
        }
    }
}

/// Platform config file location: `<config dir>/pokedex/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex").join("config.toml"))
}

/// Read and parse a TOML config file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)?;
    info!("Loaded config file {}", path.display());
    Ok(Some(config))
}
