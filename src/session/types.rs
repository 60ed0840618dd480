//! Session data types

use serde::Serialize;

use crate::analysis::UploadedDataset;

/// First assistant message of every session
pub const GREETING: &str = "👋 Hi! I'm Forge, your AI maintenance assistant. I can help you analyze data, schedule maintenance, or answer questions about the platform.";

/// Number of trailing messages shown in the sidebar
pub const VISIBLE_HISTORY: usize = 3;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// State of one browser session
///
/// The chat history is never empty and only grows. The analysis fields are
/// mutated through [`crate::analysis::AnalysisPipeline`].
#[derive(Debug, Clone)]
pub struct SessionState {
    chat_history: Vec<ChatMessage>,
    pub(crate) analysis_complete: bool,
    pub(crate) uploaded_data: Option<UploadedDataset>,
}

impl SessionState {
    /// Fresh state seeded with the greeting
    pub fn new() -> Self {
        Self {
            chat_history: vec![ChatMessage::assistant(GREETING)],
            analysis_complete: false,
            uploaded_data: None,
        }
    }

    /// Full conversation in insertion order
    pub fn history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    /// The last `n` messages (fewer if the history is shorter)
    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        let start = self.chat_history.len().saturating_sub(n);
        &self.chat_history[start..]
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.chat_history.push(message);
    }

    pub fn analysis_complete(&self) -> bool {
        self.analysis_complete
    }

    pub fn uploaded_data(&self) -> Option<&UploadedDataset> {
        self.uploaded_data.as_ref()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded() {
        let state = SessionState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].role, Role::Assistant);
        assert_eq!(state.history()[0].content, GREETING);
        assert!(!state.analysis_complete());
        assert!(state.uploaded_data().is_none());
    }

    #[test]
    fn test_recent_window() {
        let mut state = SessionState::new();
        assert_eq!(state.recent(VISIBLE_HISTORY).len(), 1);

        for i in 0..4 {
            state.push_message(ChatMessage::user(format!("msg {}", i)));
        }

        let recent = state.recent(VISIBLE_HISTORY);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].content, "msg 1");
        assert_eq!(recent[2].content, "msg 3");
        assert_eq!(state.history().len(), 5);
    }
}
