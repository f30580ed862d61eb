//! REST API module.
//!
//! Exposes the console state machine to the browser front end. Every reply,
//! success or failure, carries the console revision it was produced at.

mod console;

pub use console::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Reply with `data` as of console revision `revision_id`.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
        revision_id,
    })
}

/// Reply with an error; the console is still at `revision_id`.
pub fn error<T: Serialize>(error: impl Into<AppError>, revision_id: i64) -> ApiResult<T> {
    Err(AppErrorWithRevision {
        error: error.into(),
        revision_id,
    })
}
