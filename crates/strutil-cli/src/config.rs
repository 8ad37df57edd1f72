//! CLI configuration management.
//!
//! Holds the defaults applied when a command line does not say otherwise:
//! whether to trim surrounding whitespace, whether substrings get an
//! ellipsis, the glue used when joining split parts, and an optional
//! directory for log files.
//!
//! Configuration is stored at `~/.config/strutil/config.json`, or at the
//! path named by `STRUTIL_CONFIG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application name used for the config directory path
const APP_NAME: &str = "strutil";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the config file location
const CONFIG_ENV: &str = "STRUTIL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trim_space: bool,
    pub ellipsis: bool,
    pub glue: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trim_space: false,
            ellipsis: false,
            glue: strutil::DEFAULT_GLUE.to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load from `STRUTIL_CONFIG` if set, otherwise from the user config dir
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Resolved config file location
    pub fn path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::config_path(),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
