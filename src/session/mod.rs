//! Session State
//!
//! Per-browser-session state and the in-memory store that owns it.
//!
//! - [`SessionState`]: chat history, analysis flag, uploaded dataset
//! - [`SessionStore`]: maps session ids (cookie values) to state

pub mod store;
pub mod types;

pub use store::{SessionHandle, SessionId, SessionStore};
pub use types::{ChatMessage, Role, SessionState, GREETING, VISIBLE_HISTORY};
