//! Configuration File Loading
//!
//! Handles locating and loading `config.toml`. Lookup order:
//!
//! 1. An explicit path (`--config`)
//! 2. `$CRTTERM_CONFIG`
//! 3. `<config dir>/crtterm/config.toml`
//! 4. `~/.crtterm/config.toml`
//! 5. `./crtterm.toml`
//! 6. Built-in defaults

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "CRTTERM_CONFIG";

/// Configuration file loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// Path the configuration was loaded from, if any
    current_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader using the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
            current_path: None,
        }
    }

    /// Create a loader with explicit search paths
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            current_path: None,
        }
    }

    /// Load configuration, trying an explicit path first.
    ///
    /// An explicit path that cannot be loaded is an error. Search paths that
    /// fail to parse are skipped with a warning.
    pub fn load(&mut self, explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            let config = Self::load_from_path(path)?;
            self.current_path = Some(path.to_path_buf());
            return Ok(config);
        }

        for path in &self.search_paths {
            if !path.is_file() {
                continue;
            }

            match Self::load_from_path(path) {
                Ok(config) => {
                    info!("Configuration loaded from: {}", path.display());
                    self.current_path = Some(path.clone());
                    return Ok(config);
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load and validate a specific configuration file
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Path the last successful load came from
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Get default search paths for configuration files
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("crtterm").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".crtterm").join("config.toml"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join("crtterm.toml"));
        }

        paths
    }
}
