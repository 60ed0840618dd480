//! Request and response types
//!
//! Query strings and form bodies are deserialized into these types; the
//! health endpoint serializes to JSON.

use serde::{Deserialize, Serialize};

/// `GET /` query string
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page slug, defaults to home
    pub page: Option<String>,
    /// Digital twin motor speed
    pub rpm: Option<u32>,
    /// Digital twin load factor
    pub load: Option<u32>,
    /// Digital twin ambient temperature
    pub temp: Option<u32>,
}

/// `POST /chat` form
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
    /// Page to re-render after replying
    #[serde(default)]
    pub page: Option<String>,
}

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
