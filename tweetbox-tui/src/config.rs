use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Server configuration stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server_url: String,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Configuration manager for the .tweetbox directory
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a config manager rooted at `~/.tweetbox`
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Self::with_dir(home_dir.join(".tweetbox"))
    }

    /// Create a config manager rooted at an explicit directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create {}", config_dir.display()))?;
        }

        Ok(Self { config_dir })
    }

    /// Path of the session file written by the auth provider
    pub fn session_file(&self) -> PathBuf {
        self.config_dir.join("session.json")
    }

    fn server_config_file(&self) -> PathBuf {
        self.config_dir.join("server_config.json")
    }

    /// Save server configuration
    pub fn save_server_config(&self, config: &ServerConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .context("Failed to serialize server config")?;

        fs::write(self.server_config_file(), json)
            .context("Failed to write server config file")?;

        Ok(())
    }

    /// Load server configuration
    pub fn load_server_config(&self) -> Result<Option<ServerConfig>> {
        let config_file = self.server_config_file();

        if !config_file.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&config_file)
            .context("Failed to read server config file")?;

        let config: ServerConfig = serde_json::from_str(&json)
            .context("Failed to parse server config")?;

        Ok(Some(config))
    }
}
