//! HTTP implementation of the budget API
//!
//! One request core carries the bearer credential, serializes bodies, and
//! normalizes errors; the typed endpoints are thin wrappers over it. No
//! retries and no client-side timeout: cancellation belongs to the caller.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::RwLock;
use tracing::debug;

use crate::models::{ItemId, MonthKey};

use super::api::{BudgetApi, RemoteError};
use super::auth::{AuthRequest, LoginResponse, SignupResponse};
use super::wire::{BulkSaveRequest, MonthPayload, WireItem};

/// HTTP client for the budget API
pub struct HttpBudgetApi {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpBudgetApi {
    /// Create a client against the given base URL, with no credential
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_token(base_url, None)
    }

    /// Create a client seeded with a stored credential
    pub fn with_token(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: RwLock::new(token),
        }
    }

    /// Replace the bearer credential
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    /// Drop the bearer credential
    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Issue one request and normalize the response
    ///
    /// An empty response body is treated as null. A non-success status
    /// becomes `RemoteError::Api` with the message taken from the body's
    /// `detail` field when the body is JSON carrying one, otherwise the
    /// raw response text.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let value: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text.clone()))
        };

        if !status.is_success() {
            let message = value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if text.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("request failed")
                            .to_string()
                    } else {
                        text
                    }
                });
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(value)
    }

    async fn request_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, RemoteError> {
        let value = self.request(method, path, body).await?;
        serde_json::from_value(value).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    fn to_body<T: Serialize>(payload: &T) -> Result<Value, RemoteError> {
        serde_json::to_value(payload).map_err(|e| RemoteError::Decode(e.to_string()))
    }

    /// `POST /signup`
    pub async fn signup(&self, email: &str, password: &str) -> Result<SignupResponse, RemoteError> {
        let body = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.request_typed(Method::POST, "/signup", Some(Self::to_body(&body)?))
            .await
    }

    /// `POST /login`; the returned token becomes the client's credential
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, RemoteError> {
        let body = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .request_typed(Method::POST, "/login", Some(Self::to_body(&body)?))
            .await?;
        self.set_token(response.access_token.clone());
        Ok(response)
    }
}

#[async_trait]
impl BudgetApi for HttpBudgetApi {
    fn is_authenticated(&self) -> bool {
        self.current_token().is_some()
    }

    async fn fetch_month(&self, month: &MonthKey) -> Result<MonthPayload, RemoteError> {
        let path = format!("/budget/month?month={}", month);
        self.request_typed(Method::GET, &path, None).await
    }

    async fn create_item(&self, item: &WireItem) -> Result<WireItem, RemoteError> {
        self.request_typed(Method::POST, "/budget/item", Some(Self::to_body(item)?))
            .await
    }

    async fn update_item(&self, id: &ItemId, item: &WireItem) -> Result<WireItem, RemoteError> {
        let path = format!("/budget/item/{}", id);
        self.request_typed(Method::PUT, &path, Some(Self::to_body(item)?))
            .await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), RemoteError> {
        let path = format!("/budget/item/{}", id);
        // The confirmation body carries nothing the client needs
        self.request(Method::DELETE, &path, None).await?;
        Ok(())
    }

    async fn replace_month(
        &self,
        month: &MonthKey,
        items: Vec<WireItem>,
    ) -> Result<(), RemoteError> {
        let body = BulkSaveRequest {
            month: *month,
            items,
        };
        self.request(Method::POST, "/budget/month", Some(Self::to_body(&body)?))
            .await?;
        Ok(())
    }
}
