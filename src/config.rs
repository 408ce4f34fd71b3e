//! Configuration handling: the persisted theme preference and the
//! optional success-notice delay

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::state::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration. Read once at startup; the theme is written back
/// on every toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Color theme ("light"/"dark")
    pub theme: Option<Theme>,
    /// Delay in milliseconds before the success notice appears after a
    /// submit. Absent means show immediately.
    pub success_delay_ms: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "estate-desk", "estate-desk")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
            tracing::debug!(path = %path.display(), "config saved");
        }
        Ok(())
    }
}
