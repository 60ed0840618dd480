//! In-memory session store
//!
//! Maps session ids (UUIDs stored in the `forge_session` cookie) to session
//! state. Sessions are ephemeral: they are evicted after an idle timeout and
//! lost on restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::{interval, Instant};
use uuid::Uuid;

use super::types::SessionState;

/// Session id (UUID string stored in a cookie)
pub type SessionId = String;

/// Shared handle to one session's state
///
/// Handlers lock it for the duration of a request, so requests of the same
/// session run one after another.
pub type SessionHandle = Arc<Mutex<SessionState>>;

struct SessionEntry {
    state: SessionHandle,
    last_seen: Instant,
}

/// In-memory session store
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session for `id`, creating a fresh one when the id is
    /// missing or unknown.
    ///
    /// Returns the (possibly new) id, the state handle and whether the
    /// session was created by this call.
    pub async fn get_or_create(&self, id: Option<&str>) -> (SessionId, SessionHandle, bool) {
        if let Some(id) = id {
            if let Some(handle) = self.touch(id).await {
                return (id.to_string(), handle, false);
            }
        }

        let id = Uuid::new_v4().to_string();
        let handle = Arc::new(Mutex::new(SessionState::new()));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id.clone(),
            SessionEntry {
                state: Arc::clone(&handle),
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(session = %id, "Created session");
        (id, handle, true)
    }

    /// Get an existing session and refresh its idle timer
    pub async fn touch(&self, id: &str) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(Arc::clone(&entry.state))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Remove sessions not seen for longer than `max_idle`
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() <= max_idle);
        before - sessions.len()
    }

    /// Spawn a task that periodically evicts idle sessions
    pub fn start_background_reaper(
        &self,
        every: Duration,
        max_idle: Duration,
    ) -> tokio::task::JoinHandle<()> {
        let store = self.clone();

        tokio::spawn(async move {
            let mut ticker = interval(every);

            loop {
                ticker.tick().await;

                let evicted = store.evict_idle(max_idle).await;
                if evicted > 0 {
                    tracing::info!("Evicted {} idle sessions", evicted);
                }
            }
        })
    }
}
