//! Budget item model
//!
//! A budget item as held locally: the server-assigned identifier is absent
//! until a remote create succeeds, so every operation that needs an id has
//! to tolerate its absence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use chrono::NaiveDate;

/// Server-assigned item identifier
///
/// Ids are minted by the backend; the client never generates one. A newtype
/// keeps them from being confused with other strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A budget item in its local shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Server-assigned identifier; None until a remote create succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    /// Display name
    pub name: String,

    /// Monetary amount; non-negative
    pub amount: Decimal,

    /// Occurrence date, when the item has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Whether the item recurs every month
    #[serde(default)]
    pub recurrent: bool,

    /// Whether the item was reported (carried over) from a previous month
    #[serde(default)]
    pub reported: bool,

    /// Free-form metadata attached by the backend or other clients
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl BudgetItem {
    /// Create an item with just a name and amount
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount,
            date: None,
            recurrent: false,
            reported: false,
            metadata: Map::new(),
        }
    }

    /// Whether this item has been assigned a server identifier
    pub fn is_synced(&self) -> bool {
        self.id.is_some()
    }

    /// Validate the persistence invariants: non-empty name, non-negative amount
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.amount.is_sign_negative() {
            return Err(ItemValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.amount)
    }
}

/// Validation errors for budget items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NegativeAmount(Decimal),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name must not be empty"),
            Self::NegativeAmount(a) => write!(f, "Item amount must not be negative (got {})", a),
        }
    }
}

impl std::error::Error for ItemValidationError {}
