//! Budget API abstraction
//!
//! The reconciler talks to the server through this trait so tests can swap
//! in an in-memory implementation. The HTTP implementation lives in
//! `client`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ItemId, MonthKey};

use super::wire::{MonthPayload, WireItem};

/// Errors surfaced by the remote client
///
/// These are reportable outcomes for the sync layer, not fatal conditions:
/// a remote failure leaves the local snapshot as the visible truth.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport-level failure (DNS, refused connection, dropped socket)
    #[error("Network failure: {0}")]
    Network(String),

    /// Non-success HTTP response; message comes from the body's `detail`
    /// field when present, otherwise the raw response text
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered success but the body didn't match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The budget endpoints the reconciler drives
#[async_trait]
pub trait BudgetApi: Send + Sync {
    /// Whether a bearer credential is currently held
    fn is_authenticated(&self) -> bool;

    /// GET one month's items, grouped by category
    async fn fetch_month(&self, month: &MonthKey) -> Result<MonthPayload, RemoteError>;

    /// POST a single item; the response carries the server-assigned id
    async fn create_item(&self, item: &WireItem) -> Result<WireItem, RemoteError>;

    /// PUT a full replacement of one item
    async fn update_item(&self, id: &ItemId, item: &WireItem) -> Result<WireItem, RemoteError>;

    /// DELETE one item by id
    async fn delete_item(&self, id: &ItemId) -> Result<(), RemoteError>;

    /// Bulk replace: the server drops the month's items and inserts these
    async fn replace_month(&self, month: &MonthKey, items: Vec<WireItem>)
        -> Result<(), RemoteError>;
}
