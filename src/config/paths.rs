//! Path management for the Maîtriz client
//!
//! Provides XDG-compliant path resolution for configuration and cached data.
//!
//! ## Path Resolution Order
//!
//! 1. `MAITRIZ_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/maitriz` or `~/.config/maitriz`
//! 3. Windows: `%APPDATA%\maitriz`

use std::path::PathBuf;

use crate::error::MaitrizError;

/// Manages all paths used by the Maîtriz client
#[derive(Debug, Clone)]
pub struct MaitrizPaths {
    /// Base directory for all client data
    base_dir: PathBuf,
}

impl MaitrizPaths {
    /// Create a new MaitrizPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MaitrizError> {
        let base_dir = if let Ok(custom) = std::env::var("MAITRIZ_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MaitrizPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/maitriz/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/maitriz/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the stored bearer credential
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("credentials.json")
    }

    /// Get the path to the month cache
    pub fn months_file(&self) -> PathBuf {
        self.data_dir().join("months.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MaitrizError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MaitrizError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MaitrizError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MaitrizError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("maitriz"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MaitrizError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MaitrizError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("maitriz"))
}
