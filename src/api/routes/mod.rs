//! Route handlers organized by functionality.

pub mod actions;
pub mod analysis;
pub mod chat;
pub mod health;
pub mod leads;
pub mod pages;

use axum::response::Html;

use crate::api::error::{ApiError, ApiResult};
use crate::pages::{self as ui, Page, PageContext};

/// Resolve an optional page slug, defaulting to home
pub(crate) fn resolve_page(slug: Option<&str>) -> ApiResult<Page> {
    match slug {
        None | Some("") => Ok(Page::Home),
        Some(slug) => {
            Page::from_slug(slug).ok_or_else(|| ApiError::NotFound(format!("page '{}'", slug)))
        }
    }
}

pub(crate) fn render(page: Page, ctx: &PageContext<'_>) -> Html<String> {
    tracing::debug!(page = page.slug(), "Rendering page");
    Html(ui::render(page, ctx, &mut rand::thread_rng()))
}
