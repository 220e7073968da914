//! Custom error types for the Maîtriz client
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Remote (network/API) failures have their
//! own type in `remote`, since the sync layer treats them as reportable
//! outcomes rather than fatal errors.

use thiserror::Error;

use crate::remote::RemoteError;

/// The main error type for Maîtriz client operations
#[derive(Error, Debug)]
pub enum MaitrizError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation attempted without an authenticated session
    #[error("Not signed in: {0}")]
    AuthRequired(String),

    /// Item not found in a month snapshot
    #[error("No {category} item at position {index}")]
    ItemNotFound { category: String, index: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote client errors that must abort the operation (auth endpoints)
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl MaitrizError {
    /// Create an "item not found" error for a category slot
    pub fn item_not_found(category: impl Into<String>, index: usize) -> Self {
        Self::ItemNotFound {
            category: category.into(),
            index,
        }
    }

    /// Create an auth-required error for a named operation
    pub fn auth_required(operation: impl Into<String>) -> Self {
        Self::AuthRequired(operation.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the user needs to log in
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MaitrizError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MaitrizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Maîtriz client operations
pub type MaitrizResult<T> = Result<T, MaitrizError>;
