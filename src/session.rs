//! Bearer credential lifecycle
//!
//! The credential lives in its own file so logging out never touches
//! settings or cached data. Loading is advisory: an unreadable file means
//! "not signed in", it never blocks startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::MaitrizError;
use crate::storage::{read_json, write_json_atomic};

/// On-disk credential file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CredentialData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

/// File-backed store for the bearer credential
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored credential; failures are logged and read as absent
    pub fn load(&self) -> Option<String> {
        match read_json::<CredentialData, _>(&self.path) {
            Ok(data) => data.access_token,
            Err(e) => {
                warn!("failed to read credential store: {}", e);
                None
            }
        }
    }

    /// Persist a fresh credential
    pub fn store(&self, token: &str) -> Result<(), MaitrizError> {
        write_json_atomic(
            &self.path,
            &CredentialData {
                access_token: Some(token.to_string()),
            },
        )
    }

    /// Remove the stored credential
    pub fn clear(&self) -> Result<(), MaitrizError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                MaitrizError::Storage(format!("Failed to remove credential file: {}", e))
            })?;
        }
        Ok(())
    }
}
