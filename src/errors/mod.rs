//! Error handling module for the HR console.
//!
//! `ConsoleError` is what the state machine reports; `AppError` maps it (and
//! API-key failures) to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ActionKind;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const ACTION_NOT_AVAILABLE: &str = "ACTION_NOT_AVAILABLE";
}

/// Errors raised by console transitions. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Admin email/password pair did not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login attempted with a blank identifier.
    #[error("An identifier is required to log in")]
    MissingIdentity,

    /// Company details requested without naming a company.
    #[error("A company must be selected to view its details")]
    MissingCompanyId,

    /// The current screen does not expose this action.
    #[error("Action '{action}' is not available on the current screen")]
    NotAvailable { action: ActionKind },
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or wrong API key
    Unauthorized(String),
    /// Admin credential mismatch
    InvalidCredentials(String),
    /// Validation error
    Validation(String),
    /// Action not exposed by the current view
    NotAvailable(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotAvailable(_) => StatusCode::CONFLICT,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::InvalidCredentials(_) => codes::INVALID_CREDENTIALS,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::NotAvailable(_) => codes::ACTION_NOT_AVAILABLE,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg)
            | AppError::InvalidCredentials(msg)
            | AppError::Validation(msg)
            | AppError::NotAvailable(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ConsoleError> for AppError {
    fn from(err: ConsoleError) -> Self {
        let message = err.to_string();
        match err {
            ConsoleError::InvalidCredentials => AppError::InvalidCredentials(message),
            ConsoleError::MissingIdentity | ConsoleError::MissingCompanyId => {
                AppError::Validation(message)
            }
            ConsoleError::NotAvailable { .. } => AppError::NotAvailable(message),
        }
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
    pub revision_id: i64,
}

impl ErrorResponse {
    pub fn new(error: &AppError, revision_id: i64) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
            },
            revision_id,
        }
    }
}

/// Wrapper type for errors that carry revision_id context.
pub struct AppErrorWithRevision {
    pub error: AppError,
    pub revision_id: i64,
}

impl IntoResponse for AppErrorWithRevision {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = ErrorResponse::new(&self.error, self.revision_id);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_error_mapping() {
        let err: AppError = ConsoleError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), codes::INVALID_CREDENTIALS);
        assert_eq!(err.message(), "Invalid email or password");

        let err: AppError = ConsoleError::NotAvailable {
            action: ActionKind::ViewTasks,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert!(err.message().contains("viewTasks"));

        let err: AppError = ConsoleError::MissingIdentity.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = ConsoleError::MissingCompanyId.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
        assert!(!err.message().contains("not available"));
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = ErrorResponse::new(&AppError::Validation("bad".to_string()), 3);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], codes::VALIDATION_ERROR);
        assert_eq!(value["revisionId"], 3);
    }
}
