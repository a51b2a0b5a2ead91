//!
//! This module defines the configuration file model and the loading logic for mdhtml.
//! Configuration only affects how the converter runs (logging, output directories),
//! never the HTML it produces.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File names looked for during discovery, in priority order
pub const CONFIG_FILES: &[&str] = &[".mdhtml.toml", "mdhtml.toml"];

/// Represents the complete configuration loaded from .mdhtml.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level used when --verbose is not given (error, warn, info, debug, trace)
    #[serde(skip_serializing_if = "Option::is_none", alias = "log_level")]
    pub log_level: Option<String>,

    /// Create missing parent directories of the destination file
    #[serde(alias = "create_dirs")]
    pub create_dirs: bool,
}

impl Config {
    /// Parse a configuration from TOML text; `path` is only used in error messages
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("{path}: {e}")))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: display.clone(),
        })?;
        Self::from_toml_str(&content, &display)
    }

    /// Load configuration the way the CLI does, discovering from the current directory.
    ///
    /// - `isolated` ignores every configuration file and returns defaults
    /// - an explicit `config_path` must exist and parse
    /// - otherwise the nearest discovered file is used; defaults are used if there
    ///   is none or it cannot be loaded
    pub fn load_with_discovery(config_path: Option<&str>, isolated: bool) -> Result<Self, ConfigError> {
        let start_dir = std::env::current_dir().map_err(|source| ConfigError::IoError {
            source,
            path: ".".to_string(),
        })?;
        Self::load_with_discovery_from(config_path, isolated, &start_dir)
    }

    /// Same as [`Config::load_with_discovery`] but starting discovery at `start_dir`
    pub fn load_with_discovery_from(
        config_path: Option<&str>,
        isolated: bool,
        start_dir: &Path,
    ) -> Result<Self, ConfigError> {
        if isolated {
            log::debug!("Isolated mode: ignoring configuration files");
            return Ok(Self::default());
        }

        if let Some(path) = config_path {
            log::debug!("Loading configuration from {path}");
            return Self::from_file(Path::new(path));
        }

        match discover_config_file(start_dir) {
            Some(path) => {
                log::debug!("Discovered configuration file {}", path.display());
                match Self::from_file(&path) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        eprintln!("Warning: ignoring configuration file {}: {e}", path.display());
                        Ok(Self::default())
                    }
                }
            }
            None => Ok(Self::default()),
        }
    }

    /// Level filter from `log-level`, or `None` if unset or not a valid level
    pub fn log_level_filter(&self) -> Option<LevelFilter> {
        let level = self.global.log_level.as_deref()?;
        LevelFilter::from_str(level).ok()
    }
}

/// Walk up from `start_dir` looking for a configuration file.
///
/// The search stops at the first directory containing `.git`, after checking it.
pub fn discover_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current_dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if current_dir.join(".git").exists() || !current_dir.pop() {
            return None;
        }
    }
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    // Check if file already exists
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    let default_config = r#"# mdhtml configuration file

[global]
# Log level when --verbose is not given: error, warn, info, debug, trace
# log-level = "warn"

# Create missing parent directories of the destination file
create-dirs = false
"#;

    fs::write(path, default_config).map_err(|source| ConfigError::IoError {
        source,
        path: path.to_string(),
    })
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}
