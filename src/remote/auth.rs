//! Auth endpoint payloads
//!
//! Signup and login share a request shape. The access token from a login
//! response is the bearer credential for everything else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /signup` and `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /signup`
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    /// Identifier shape is backend-defined (integer or string)
    #[serde(default)]
    pub user_id: Value,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// User profile as the backend returns it; displayed, never interpreted
    #[serde(default)]
    pub user: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_parses() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "access_token": "tok-123",
            "user": {"email": "a@b.c"}
        }))
        .unwrap();
        assert_eq!(resp.access_token, "tok-123");
        assert_eq!(resp.user["email"], json!("a@b.c"));
    }

    #[test]
    fn test_login_response_requires_token() {
        let result: Result<LoginResponse, _> =
            serde_json::from_value(json!({"user": {"email": "a@b.c"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_signup_response_tolerates_id_shapes() {
        let with_int: SignupResponse =
            serde_json::from_value(json!({"message": "ok", "user_id": 7})).unwrap();
        let with_str: SignupResponse =
            serde_json::from_value(json!({"message": "ok", "user_id": "u7"})).unwrap();
        assert_eq!(with_int.user_id, json!(7));
        assert_eq!(with_str.user_id, json!("u7"));
    }
}
