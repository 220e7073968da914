//! Remote client for the budget API
//!
//! `BudgetApi` is the seam the reconciler is tested through; `HttpBudgetApi`
//! is the real implementation.

pub mod api;
pub mod auth;
pub mod client;
pub mod wire;

pub use api::{BudgetApi, RemoteError};
pub use auth::{LoginResponse, SignupResponse};
pub use client::HttpBudgetApi;
pub use wire::{BulkSaveRequest, MonthData, MonthPayload, WireItem};
