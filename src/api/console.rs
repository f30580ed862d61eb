//! Console API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Action, View};
use crate::AppState;

/// GET /api/console - The view for the current state.
pub async fn get_view(State(state): State<AppState>) -> ApiResult<View> {
    let console = state.console.lock().await;
    success(console.view(), console.revision())
}

/// POST /api/console/actions - Apply an action exposed by the current view.
pub async fn dispatch_action(
    State(state): State<AppState>,
    payload: Result<Json<Action>, JsonRejection>,
) -> ApiResult<View> {
    let mut console = state.console.lock().await;
    let revision_id = console.revision();

    let Json(action) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error(AppError::Validation(rejection.body_text()), revision_id);
        }
    };

    let kind = action.kind();
    match console.dispatch(action) {
        Ok(view) => success(view, console.revision()),
        Err(e) => {
            tracing::debug!(
                action = %kind,
                role = console.role().as_str(),
                screen = ?console.screen(),
                error = %e,
                "action rejected"
            );
            error(e, revision_id)
        }
    }
}
