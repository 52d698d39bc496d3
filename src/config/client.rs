use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::defaults;

/// Local settings for the panel itself (not the bot's settings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Dashboard backend, without trailing path
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub toast_duration_ms: u64,
    pub window_width: u16,
    pub window_height: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::client::BASE_URL.to_string(),
            request_timeout_secs: defaults::client::REQUEST_TIMEOUT_SECS,
            toast_duration_ms: crate::constants::toast::DURATION_MS,
            window_width: defaults::manager::WINDOW_WIDTH,
            window_height: defaults::manager::WINDOW_HEIGHT,
        }
    }
}

impl ClientConfig {
    pub fn path() -> PathBuf {
        #[cfg(not(test))]
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        #[cfg(test)]
        let mut path = std::env::temp_dir().join("bot-settings-panel-test");

        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, creating it with defaults if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config file not found, creating default config at {:?}",
                config_path
            );
            let config = ClientConfig::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let config: ClientConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", config_path))?;

        info!(base_url = %config.base_url, "Loaded client config");
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json_string =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        fs::write(config_path, json_string)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        info!("Saved config to {:?}", config_path);
        Ok(())
    }
}
