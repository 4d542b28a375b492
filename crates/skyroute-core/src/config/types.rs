//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::{DEFAULT_MAX_HOPS, DEFAULT_MAX_ROUTES};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "skyroute.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Network file to load instead of the built-in sample (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,

    /// Route search limits
    #[serde(default)]
    pub search: SearchConfig,
}

/// Limits applied to alternative-route search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum flights per route
    #[serde(default = "default_max_hops")]
    pub max_hops: u32,

    /// Maximum number of routes returned
    #[serde(default = "default_max_routes")]
    pub max_routes: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_hops: default_max_hops(),
            max_routes: default_max_routes(),
        }
    }
}

fn default_max_hops() -> u32 {
    DEFAULT_MAX_HOPS
}

fn default_max_routes() -> usize {
    DEFAULT_MAX_ROUTES
}
