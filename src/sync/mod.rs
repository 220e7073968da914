//! Local/remote reconciliation
//!
//! The reconciler applies every mutation locally first, then reconciles
//! with the server best-effort. `SyncStatus` tells the caller how the
//! remote phase went; local state is already settled by then.

pub mod reconciler;

pub use reconciler::{AddOutcome, Reconciler};

use std::fmt;

use crate::remote::RemoteError;

/// Outcome of the remote phase of a reconciler operation
#[derive(Debug)]
pub enum SyncStatus {
    /// The remote call succeeded
    Synced,
    /// No authenticated session; the remote phase was skipped
    Offline,
    /// The item has no server id; no call was made
    MissingId,
    /// The remote call failed; the local snapshot stands
    Failed(RemoteError),
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synced => write!(f, "synced"),
            Self::Offline => write!(f, "sync skipped, not signed in"),
            Self::MissingId => write!(f, "sync skipped, item has no server id"),
            Self::Failed(e) => write!(f, "sync failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SyncStatus::Synced.to_string(), "synced");
        assert!(SyncStatus::Failed(RemoteError::Network("down".into()))
            .to_string()
            .contains("down"));
    }

    #[test]
    fn test_is_synced() {
        assert!(SyncStatus::Synced.is_synced());
        assert!(!SyncStatus::Offline.is_synced());
        assert!(!SyncStatus::MissingId.is_synced());
    }
}
