//! Page Routes
//!
//! - GET /?page=<slug> - Render a dashboard page

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;
use tower_cookies::Cookies;

use super::{render, resolve_page};
use crate::api::dto::PageQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::pages::TwinParams;

/// GET /
pub async fn show_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(query): Query<PageQuery>,
) -> ApiResult<Html<String>> {
    let page = resolve_page(query.page.as_deref())?;
    let twin = TwinParams::from_query(query.rpm, query.load, query.temp);

    let handle = state.session(&cookies).await;
    let session = handle.lock().await;

    let ctx = state.context(&session).with_twin(twin);
    Ok(render(page, &ctx))
}
