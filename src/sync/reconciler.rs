//! The reconciler: month-scoped merge of local and remote budget state
//!
//! Every operation runs in two phases. Phase one applies the mutation to
//! the cached snapshot and persists it, so the user's data survives any
//! remote outcome. Phase two is a single awaited remote call whose result
//! is merged back (create propagates the server id) or reported as a
//! `SyncStatus`. Remote failures never roll phase one back.
//!
//! There is no per-month mutual exclusion: concurrent operations on one
//! month interleave and the last cache write wins. The id merge after a
//! create re-checks its slot so a race leaves the item id-less instead of
//! tagging the wrong one.

use tracing::{debug, warn};

use crate::error::{MaitrizError, MaitrizResult};
use crate::models::{BudgetItem, Category, ItemId, MonthKey, MonthSnapshot};
use crate::remote::{BudgetApi, WireItem};
use crate::storage::MonthCache;

use super::SyncStatus;

/// Result of `add_item`: the item as cached (with the server id when the
/// create succeeded) plus the remote outcome
#[derive(Debug)]
pub struct AddOutcome {
    pub item: BudgetItem,
    pub status: SyncStatus,
}

/// Merges local cache state with remote server state, month by month
pub struct Reconciler<A: BudgetApi> {
    api: A,
    cache: MonthCache,
}

impl<A: BudgetApi> Reconciler<A> {
    pub fn new(api: A, cache: MonthCache) -> Self {
        Self { api, cache }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The month's snapshot as held locally
    pub fn local_month(&self, month: &MonthKey) -> MaitrizResult<MonthSnapshot> {
        self.cache.snapshot(month)
    }

    /// Month keys present in the local cache
    pub fn cached_months(&self) -> MaitrizResult<Vec<MonthKey>> {
        self.cache.months()
    }

    /// Replace the local snapshot with the server's view of the month
    ///
    /// Without a session this is a no-op: the local snapshot, if any,
    /// stands. On failure the existing snapshot is left untouched.
    pub async fn fetch_month(&self, month: &MonthKey) -> MaitrizResult<SyncStatus> {
        if !self.api.is_authenticated() {
            return Ok(SyncStatus::Offline);
        }

        match self.api.fetch_month(month).await {
            Ok(payload) => {
                let snapshot = payload.data.into_snapshot();
                debug!(%month, items = snapshot.len(), "month fetched");
                self.cache.insert(*month, snapshot)?;
                Ok(SyncStatus::Synced)
            }
            Err(e) => {
                warn!(%month, "fetch failed: {}", e);
                Ok(SyncStatus::Failed(e))
            }
        }
    }

    /// Append an item locally, then create it remotely
    ///
    /// The snapshot is persisted before the network call so the item is
    /// never lost, and again after a successful create to record the
    /// server id. An item whose create failed stays id-less: update and
    /// delete cannot reach the server for it until a bulk save.
    pub async fn add_item(
        &self,
        month: &MonthKey,
        category: Category,
        item: BudgetItem,
    ) -> MaitrizResult<AddOutcome> {
        item.validate()
            .map_err(|e| MaitrizError::Validation(e.to_string()))?;

        let index = self.cache.with_snapshot_mut(month, |snapshot| {
            let items = snapshot.items_mut(category);
            items.push(item.clone());
            items.len() - 1
        })?;

        if !self.api.is_authenticated() {
            return Ok(AddOutcome {
                item,
                status: SyncStatus::Offline,
            });
        }

        let wire = WireItem::from_local(*month, category, &item);
        match self.api.create_item(&wire).await {
            Ok(created) => {
                let mut item = item;
                if let Some(id) = created.id {
                    self.merge_created_id(month, category, index, &item, &id)?;
                    item.id = Some(id);
                }
                Ok(AddOutcome {
                    item,
                    status: SyncStatus::Synced,
                })
            }
            Err(e) => {
                warn!(%month, %category, "create failed: {}", e);
                Ok(AddOutcome {
                    item,
                    status: SyncStatus::Failed(e),
                })
            }
        }
    }

    /// Write a freshly assigned server id into the cached item
    ///
    /// The slot is re-checked before assignment: if the snapshot changed
    /// while the create was in flight, the id is dropped rather than
    /// attached to whatever sits there now.
    fn merge_created_id(
        &self,
        month: &MonthKey,
        category: Category,
        index: usize,
        expected: &BudgetItem,
        id: &ItemId,
    ) -> MaitrizResult<()> {
        self.cache.with_snapshot_mut(month, |snapshot| {
            match snapshot.items_mut(category).get_mut(index) {
                Some(slot)
                    if slot.id.is_none()
                        && slot.name == expected.name
                        && slot.amount == expected.amount =>
                {
                    slot.id = Some(id.clone());
                }
                _ => {
                    warn!(%month, %category, %id, "snapshot changed during create, server id not merged");
                }
            }
        })
    }

    /// Replace the item at `index` locally, then push a full-replace update
    ///
    /// An item without a server id is updated locally only: no network
    /// call is made and the outcome says so.
    pub async fn update_item(
        &self,
        month: &MonthKey,
        category: Category,
        index: usize,
        mut updated: BudgetItem,
    ) -> MaitrizResult<SyncStatus> {
        updated
            .validate()
            .map_err(|e| MaitrizError::Validation(e.to_string()))?;

        let replaced = self.cache.with_snapshot_mut(month, |snapshot| {
            let items = snapshot.items_mut(category);
            match items.get_mut(index) {
                Some(slot) => {
                    // The caller usually edits a copy without the id;
                    // the slot's id survives the replace
                    if updated.id.is_none() {
                        updated.id = slot.id.clone();
                    }
                    *slot = updated.clone();
                    Ok(updated.clone())
                }
                None => Err(MaitrizError::item_not_found(category.wire_name(), index)),
            }
        })?;
        let replaced = replaced?;

        let Some(id) = replaced.id.clone() else {
            return Ok(SyncStatus::MissingId);
        };
        if !self.api.is_authenticated() {
            return Ok(SyncStatus::Offline);
        }

        let wire = WireItem::from_local(*month, category, &replaced);
        match self.api.update_item(&id, &wire).await {
            Ok(_) => Ok(SyncStatus::Synced),
            Err(e) => {
                warn!(%month, %category, %id, "update failed: {}", e);
                Ok(SyncStatus::Failed(e))
            }
        }
    }

    /// Remove the item at `index` locally, then delete it remotely
    ///
    /// Like update, an id-less item is removed locally only.
    pub async fn delete_item(
        &self,
        month: &MonthKey,
        category: Category,
        index: usize,
    ) -> MaitrizResult<SyncStatus> {
        let removed = self.cache.with_snapshot_mut(month, |snapshot| {
            let items = snapshot.items_mut(category);
            if index < items.len() {
                Ok(items.remove(index))
            } else {
                Err(MaitrizError::item_not_found(category.wire_name(), index))
            }
        })?;
        let removed = removed?;

        let Some(id) = removed.id else {
            return Ok(SyncStatus::MissingId);
        };
        if !self.api.is_authenticated() {
            return Ok(SyncStatus::Offline);
        }

        match self.api.delete_item(&id).await {
            Ok(()) => Ok(SyncStatus::Synced),
            Err(e) => {
                warn!(%month, %category, %id, "delete failed: {}", e);
                Ok(SyncStatus::Failed(e))
            }
        }
    }

    /// Send the whole month as one bulk replace
    ///
    /// All five categories are flattened in canonical order. The server
    /// drops the month's items and reinserts the sequence, regenerating
    /// every id; ids are not sent. An empty month sends an empty sequence.
    pub async fn bulk_save_month(&self, month: &MonthKey) -> MaitrizResult<SyncStatus> {
        if !self.api.is_authenticated() {
            return Ok(SyncStatus::Offline);
        }

        let snapshot = self.cache.snapshot(month)?;
        let items: Vec<WireItem> = snapshot
            .iter_all()
            .map(|(category, item)| WireItem::from_local(*month, category, item))
            .collect();

        debug!(%month, items = items.len(), "bulk save");
        match self.api.replace_month(month, items).await {
            Ok(()) => Ok(SyncStatus::Synced),
            Err(e) => {
                warn!(%month, "bulk save failed: {}", e);
                Ok(SyncStatus::Failed(e))
            }
        }
    }
}
