//! Mock Action Routes
//!
//! - POST /actions/:action - Decorative buttons (start trial, download report, ...)

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;
use tower_cookies::Cookies;

use super::render;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::pages::MockAction;

/// POST /actions/:action
pub async fn trigger_action(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Path(action): Path<String>,
) -> ApiResult<Html<String>> {
    let action = MockAction::from_slug(&action)
        .ok_or_else(|| ApiError::NotFound(format!("action '{}'", action)))?;

    let handle = state.session(&cookies).await;
    let session = handle.lock().await;

    tracing::debug!(action = ?action, "Mock action");
    let ctx = state.context(&session).with_notice(action.notice());
    Ok(render(action.page(), &ctx))
}
