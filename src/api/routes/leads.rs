//! Lead Routes
//!
//! - POST /leads/:kind - Submit the Free Trial (`trial`) or Get Demo (`demo`) form

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Form,
};
use std::sync::Arc;
use tower_cookies::Cookies;

use super::render;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::pages::leads::LEAD_RECEIVED;
use crate::pages::{LeadForm, LeadKind, Notice};

/// POST /leads/:kind
///
/// Validates and acknowledges the submission. Invalid forms are re-rendered
/// with the submitted values and an error notice.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Path(kind): Path<String>,
    Form(form): Form<LeadForm>,
) -> ApiResult<(StatusCode, Html<String>)> {
    let kind = LeadKind::from_slug(&kind)
        .ok_or_else(|| ApiError::NotFound(format!("lead form '{}'", kind)))?;

    let handle = state.session(&cookies).await;
    let session = handle.lock().await;

    match form.validate() {
        Ok(()) => {
            tracing::info!(kind = kind.slug(), industry = %form.industry, "Lead received");
            let ctx = state
                .context(&session)
                .with_notice(Some(Notice::success(LEAD_RECEIVED)));
            Ok((StatusCode::OK, render(kind.page(), &ctx)))
        }
        Err(e) => {
            tracing::debug!(kind = kind.slug(), error = %e, "Lead form rejected");
            let ctx = state
                .context(&session)
                .with_notice(Some(Notice::error(e.to_string())))
                .with_lead(&form);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(kind.page(), &ctx)))
        }
    }
}
