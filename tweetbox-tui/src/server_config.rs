use crate::config::{ConfigManager, ServerConfig};
use anyhow::Result;

/// Used when nothing else names a server
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Server configuration utility for managing server URL settings
pub struct ServerConfigManager {
    config_manager: ConfigManager,
}

impl ServerConfigManager {
    pub fn new(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// Determine the server URL to use based on priority:
    /// 1. CLI argument or TWEETBOX_SERVER_URL (clap merges the two)
    /// 2. Saved configuration file
    /// 3. Default
    ///
    /// An explicit URL is saved so later runs reuse it.
    pub fn determine_server_url(&self, cli_override: Option<String>) -> Result<String> {
        if let Some(url) = cli_override {
            if let Err(e) = self.save_server_url(url.clone()) {
                log::warn!("Failed to save server URL: {}", e);
            }
            return Ok(url);
        }

        match self.config_manager.load_server_config() {
            Ok(Some(config)) => return Ok(config.server_url),
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring unreadable server config: {:#}", e),
        }

        Ok(DEFAULT_SERVER_URL.to_string())
    }

    /// Save server URL to configuration file
    pub fn save_server_url(&self, server_url: String) -> Result<()> {
        let config = ServerConfig {
            server_url,
            last_updated: chrono::Utc::now(),
        };
        self.config_manager.save_server_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (tempfile::TempDir, ServerConfigManager) {
        let temp = tempfile::tempdir().unwrap();
        let config_manager = ConfigManager::with_dir(temp.path()).unwrap();
        (temp, ServerConfigManager::new(config_manager))
    }

    #[test]
    fn test_default_server_url() {
        let (_temp, manager) = manager();
        assert_eq!(manager.determine_server_url(None).unwrap(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_cli_override_priority_and_persistence() {
        let (_temp, manager) = manager();

        let url = manager
            .determine_server_url(Some("http://cli-override:3000".to_string()))
            .unwrap();
        assert_eq!(url, "http://cli-override:3000");

        // Saved for the next run
        assert_eq!(manager.determine_server_url(None).unwrap(), "http://cli-override:3000");
    }

    #[test]
    fn test_corrupt_config_falls_back_to_default() {
        let (temp, manager) = manager();
        std::fs::write(temp.path().join("server_config.json"), "garbage").unwrap();

        assert_eq!(manager.determine_server_url(None).unwrap(), DEFAULT_SERVER_URL);
    }
}
