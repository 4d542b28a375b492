//! Configuration for skyroute
//!
//! Read from `skyroute.toml` in the working directory, or from an explicit
//! `--config` path. A missing default file means built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, RouteError};

pub use types::{Config, SearchConfig, CONFIG_FILE_NAME};

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;
        let mut config = Self::from_toml(&content)?;

        // Network paths are relative to the config file's directory
        if let (Some(network), Some(dir)) = (config.network.as_ref(), path.parent()) {
            if network.is_relative() {
                config.network = Some(dir.join(network));
            }
        }

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, the default file may not
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path: PathBuf = cwd.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_hops == 0 {
            bail_invalid!("max_hops (must be at least 1)", self.max_hops);
        }
        if self.max_routes == 0 {
            bail_invalid!("max_routes (must be at least 1)", self.max_routes);
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(self, max_hops: Option<u32>, max_routes: Option<usize>) -> Result<Self> {
        let merged = SearchConfig {
            max_hops: max_hops.unwrap_or(self.max_hops),
            max_routes: max_routes.unwrap_or(self.max_routes),
        };
        merged.validate()?;
        Ok(merged)
    }
}
