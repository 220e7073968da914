//! User settings for the Maîtriz client
//!
//! Settings are stored as JSON next to the cached data. Every field has a
//! serde default so older config files keep loading after upgrades.

use serde::{Deserialize, Serialize};

use super::paths::MaitrizPaths;
use crate::error::MaitrizError;
use crate::storage::{read_json, write_json_atomic};

/// User settings for the Maîtriz client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the budget API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Currency symbol used in table output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "https://fastapi-backend-m2hs.onrender.com".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults when absent
    pub fn load_or_create(paths: &MaitrizPaths) -> Result<Self, MaitrizError> {
        paths.ensure_directories()?;

        let path = paths.settings_file();
        if !path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        read_json(path)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MaitrizPaths) -> Result<(), MaitrizError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.api_base_url.starts_with("https://"));
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MaitrizPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MaitrizPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::load_or_create(&paths).unwrap();
        settings.api_base_url = "http://localhost:8000".to_string();
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_partial_config_gets_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MaitrizPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.api_base_url, default_api_base_url());
    }
}
