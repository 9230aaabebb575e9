//! Command-line configuration.
//!
//! Looked up in order: an explicit path, `./qfilter.toml`, then
//! `<config dir>/qfilter/config.toml`. A missing file means defaults.
//!
//! ```toml
//! backend = "mongo"
//! color = false
//! pretty = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::transpiler::Backend;

pub const LOCAL_CONFIG: &str = "qfilter.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output backend.
    pub backend: Backend,
    /// Colorize terminal output.
    pub color: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Mysql,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> FilterResult<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> FilterResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load the first config found. An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> FilterResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::search_paths() {
            if path.is_file() {
                debug!(path = %path.display(), "loading config");
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("qfilter").join("config.toml"));
        }
        paths
    }
}
