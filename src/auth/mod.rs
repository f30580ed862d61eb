//! Authentication for the console.
//!
//! Two concerns live here: the optional pre-shared key guarding the HTTP
//! API, and the credential check behind the admin login screen. Both use
//! constant-time comparison.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{AppError, ErrorResponse};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Decides whether an admin email/password pair may log in.
pub trait CredentialChecker: Send + Sync {
    fn check_admin(&self, email: &str, password: &str) -> bool;
}

/// A single admin account whose credentials come from configuration.
#[derive(Debug, Clone)]
pub struct StaticAdminCredentials {
    email: String,
    password: String,
}

impl StaticAdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl CredentialChecker for StaticAdminCredentials {
    fn check_admin(&self, email: &str, password: &str) -> bool {
        // Evaluate both fields so timing does not reveal which one failed.
        let email_ok = constant_time_compare(email, &self.email);
        let password_ok = constant_time_compare(password, &self.password);
        email_ok & password_ok
    }
}

/// PSK authentication layer function that takes the expected PSK as a parameter.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // If no PSK is configured, allow all requests (dev mode)
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
        })
        .map(|s| s.to_string());

    match provided {
        Some(key) if constant_time_compare(&key, &expected) => next.run(request).await,
        Some(_) => unauthorized_response("Invalid API key"),
        None => unauthorized_response("Missing API key"),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse::new(&AppError::Unauthorized(message.to_string()), 0);

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("key-123", "key-123"));
        assert!(!constant_time_compare("key-123", "key-124"));
        assert!(!constant_time_compare("short", "much-longer-key"));
        assert!(constant_time_compare("", ""));
    }

    #[test]
    fn test_admin_credentials_require_both_fields() {
        let checker = StaticAdminCredentials::new("admin@college.edu", "s3cret");

        assert!(checker.check_admin("admin@college.edu", "s3cret"));
        assert!(!checker.check_admin("admin@college.edu", "wrong"));
        assert!(!checker.check_admin("other@college.edu", "s3cret"));
        assert!(!checker.check_admin("", ""));
    }

    #[test]
    fn test_admin_credentials_are_exact_match() {
        let checker = StaticAdminCredentials::new("admin@college.edu", "s3cret");

        assert!(!checker.check_admin("Admin@college.edu", "s3cret"));
        assert!(!checker.check_admin("admin@college.edu ", "s3cret"));
    }
}
