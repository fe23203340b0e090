use crate::result::SyncResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SORT_BY_NAME: &str = "Name";
pub const SORT_BY_DATE_MODIFIED: &str = "Date Modified";

/// Persisted user preferences and credentials.
///
/// Loaded from the platform config directory; any read or parse failure
/// falls back to defaults so startup never blocks on a bad config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board list ordering: "Name" or "Date Modified".
    #[serde(default)]
    pub sort_boards: Option<String>,
    #[serde(default = "default_show_column_colors")]
    pub show_column_colors: bool,
    /// Access token for the remote database integration.
    #[serde(default)]
    pub integration_token: Option<String>,
}

fn default_show_column_colors() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sort_boards: None,
            show_column_colors: true,
            integration_token: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/boards-sync/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("boards-sync/config.toml"))
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> SyncResult<()> {
        let Some(config_path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::SyncError::Serialization(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Sort preference as persisted, defaulting to name order.
    pub fn effective_sort(&self) -> &str {
        self.sort_boards.as_deref().unwrap_or(SORT_BY_NAME)
    }
}
