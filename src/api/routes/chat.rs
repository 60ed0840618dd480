//! Chat Routes
//!
//! - POST /chat - Send a message to the Forge assistant

use axum::{extract::State, response::Html, Form};
use std::sync::Arc;
use tower_cookies::Cookies;

use super::{render, resolve_page};
use crate::api::dto::ChatForm;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /chat
///
/// Appends the message and the canned reply to the session history, then
/// re-renders the page the message was sent from. Blank messages change
/// nothing.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<ChatForm>,
) -> ApiResult<Html<String>> {
    let page = resolve_page(form.page.as_deref())?;

    let handle = state.session(&cookies).await;
    let mut session = handle.lock().await;

    if state.assistant.respond(&form.message, &mut session).is_some() {
        tracing::info!(
            intent = ?state.assistant.intent(&form.message),
            history = session.history().len(),
            "Chat message answered"
        );
    }

    let ctx = state.context(&session);
    Ok(render(page, &ctx))
}
