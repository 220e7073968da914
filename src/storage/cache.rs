//! Month cache repository
//!
//! Persists the month-key → snapshot mapping to a single JSON file. The
//! remote server is the source of truth, so writes never fail the caller:
//! a failed persist is logged and the in-memory state stays current.
//! Months are created empty on first access and never evicted.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::warn;

use crate::error::MaitrizError;
use crate::models::{MonthKey, MonthSnapshot};

use super::file_io::{read_json, write_json_atomic};

/// Serializable cache file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CacheData {
    months: BTreeMap<MonthKey, MonthSnapshot>,
}

/// Repository for month snapshot persistence
pub struct MonthCache {
    path: PathBuf,
    data: RwLock<BTreeMap<MonthKey, MonthSnapshot>>,
}

impl MonthCache {
    /// Create a new cache backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load the cache from disk (missing file yields an empty cache)
    pub fn load(&self) -> Result<(), MaitrizError> {
        let file_data: CacheData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MaitrizError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.months;
        Ok(())
    }

    /// Write the cache to disk, swallowing failures
    ///
    /// The local cache is advisory; a failed write must not abort the
    /// operation that triggered it. Failures are logged at warn level.
    pub fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!("failed to persist month cache: {}", e);
        }
    }

    fn try_persist(&self) -> Result<(), MaitrizError> {
        let data = self
            .data
            .read()
            .map_err(|e| MaitrizError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CacheData {
            months: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a copy of one month's snapshot, empty if the month is unknown
    pub fn snapshot(&self, month: &MonthKey) -> Result<MonthSnapshot, MaitrizError> {
        let data = self
            .data
            .read()
            .map_err(|e| MaitrizError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(month).cloned().unwrap_or_default())
    }

    /// Replace one month's snapshot wholesale and persist
    pub fn insert(&self, month: MonthKey, snapshot: MonthSnapshot) -> Result<(), MaitrizError> {
        {
            let mut data = self.data.write().map_err(|e| {
                MaitrizError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            data.insert(month, snapshot);
        }
        self.persist();
        Ok(())
    }

    /// Mutate one month's snapshot in place and persist
    ///
    /// The month is created empty on first access. The closure's return
    /// value is handed back to the caller.
    pub fn with_snapshot_mut<T>(
        &self,
        month: &MonthKey,
        f: impl FnOnce(&mut MonthSnapshot) -> T,
    ) -> Result<T, MaitrizError> {
        let result = {
            let mut data = self.data.write().map_err(|e| {
                MaitrizError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            let snapshot = data.entry(*month).or_default();
            f(snapshot)
        };
        self.persist();
        Ok(result)
    }

    /// Month keys currently held in the cache
    pub fn months(&self) -> Result<Vec<MonthKey>, MaitrizError> {
        let data = self
            .data
            .read()
            .map_err(|e| MaitrizError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.keys().copied().collect())
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &std::path::Path {
        &self.path
    }
}
