//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::analysis::AnalysisPipeline;
use crate::assistant::Responder;
use crate::config::{Config, ServerConfig};
use crate::pages::PageContext;
use crate::session::{SessionHandle, SessionState, SessionStore};

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "forge_session";

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Per-browser session state
    pub sessions: SessionStore,
    /// Forge chat responder
    pub assistant: Arc<Responder>,
    /// Mock analysis state machine
    pub pipeline: Arc<AnalysisPipeline>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: SessionStore::new(),
            assistant: Arc::new(Responder::standard()),
            pipeline: Arc::new(AnalysisPipeline::new(config.analysis.delay())),
            config: Arc::new(config.server.clone()),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Resolve the caller's session, issuing a cookie for new sessions
    pub async fn session(&self, cookies: &Cookies) -> SessionHandle {
        let existing = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string());
        let (id, handle, created) = self.sessions.get_or_create(existing.as_deref()).await;

        if created {
            let mut cookie = Cookie::new(SESSION_COOKIE, id);
            cookie.set_http_only(true);
            cookie.set_path("/");
            cookie.set_same_site(SameSite::Lax);
            cookies.add(cookie);
        }

        handle
    }

    /// Render context for one request
    pub fn context<'a>(&'a self, session: &'a SessionState) -> PageContext<'a> {
        PageContext::new(session, self.pipeline.report(), Local::now().date_naive())
    }
}
