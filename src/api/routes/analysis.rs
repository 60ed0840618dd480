//! Analysis Routes
//!
//! - POST /upload - Upload a CSV file (multipart, field `file`)
//! - POST /analyze - Run the mock analysis
//! - POST /analysis/reset - Start a new analysis
//!
//! All three re-render the Input Data page.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use tower_cookies::Cookies;

use super::render;
use crate::analysis::AnalysisError;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::pages::{Notice, Page};

const UPLOAD_FIELD: &str = "file";
const DEFAULT_FILE_NAME: &str = "upload.csv";

fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::Parse(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AnalysisError::NoDataset | AnalysisError::AlreadyComplete => StatusCode::CONFLICT,
    }
}

/// POST /upload
pub async fn upload_dataset(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Html<String>)> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field
                .file_name()
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_FILE_NAME)
                .to_string();
            let data = field.bytes().await?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| ApiError::Validation("Missing 'file' field".to_string()))?;

    let handle = state.session(&cookies).await;
    let mut session = handle.lock().await;

    let (status, notice) = match state.pipeline.upload(&mut session, &file_name, &data) {
        Ok(dataset) => (
            StatusCode::OK,
            Notice::success(format!("Successfully uploaded: {}", dataset.file_name)),
        ),
        Err(e) => {
            tracing::warn!(file = %file_name, error = %e, "Upload rejected");
            (status_for(&e), Notice::error(e.notice()))
        }
    };

    let ctx = state.context(&session).with_notice(Some(notice));
    Ok((status, render(Page::InputData, &ctx)))
}

/// POST /analyze
pub async fn run_analysis(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> (StatusCode, Html<String>) {
    let handle = state.session(&cookies).await;
    let mut session = handle.lock().await;

    let (status, notice) = match state.pipeline.analyze(&mut session).await {
        Ok(_) => (StatusCode::OK, None),
        Err(e) => {
            tracing::warn!(error = %e, "Analysis not started");
            (status_for(&e), Some(Notice::error(e.notice())))
        }
    };

    let ctx = state.context(&session).with_notice(notice);
    (status, render(Page::InputData, &ctx))
}

/// POST /analysis/reset
pub async fn reset_analysis(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Html<String> {
    let handle = state.session(&cookies).await;
    let mut session = handle.lock().await;

    state.pipeline.reset(&mut session);

    let ctx = state.context(&session);
    render(Page::InputData, &ctx)
}
