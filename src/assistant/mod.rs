//! Forge Assistant
//!
//! Canned-reply chat responder. Replies are picked from an ordered rule
//! table: the first rule with a keyword contained in the lowercased input
//! wins, otherwise the fallback reply is used.
//!
//! ```rust
//! use predictraforge::assistant::{Intent, Responder};
//!
//! let forge = Responder::standard();
//! assert_eq!(forge.intent("What's the PRICING?"), Intent::Pricing);
//! ```

use serde::Serialize;

use crate::session::{ChatMessage, SessionState};

pub const GREETING_REPLY: &str =
    "Hello! I'm ready to optimize your maintenance schedules. Where should we start?";
pub const PRICING_REPLY: &str =
    "Our prediction models typically save clients 45% in maintenance costs. Plans start at $499/mo.";
pub const UPLOAD_REPLY: &str =
    "You can upload CSV files in the 'Input Data' section. I'll scan them for anomalies automatically.";
pub const ALERTS_REPLY: &str =
    "I monitor sensors 24/7. You can configure SMS, Email, or Slack notifications in the 'Instant Alerts' page.";
pub const FALLBACK_REPLY: &str =
    "I'm processing that request. For detailed analysis, please visit the Input Data page.";

/// Which rule produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Pricing,
    Upload,
    Alerts,
    Fallback,
}

/// Keywords → reply
#[derive(Debug, Clone)]
pub struct Rule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `lowered` must already be lowercase
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Ordered first-match responder
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Default for Responder {
    fn default() -> Self {
        Self::standard()
    }
}

impl Responder {
    /// The Forge rule table
    pub fn standard() -> Self {
        Self::with_rules(
            vec![
                Rule {
                    intent: Intent::Greeting,
                    keywords: &["hello", "hi"],
                    reply: GREETING_REPLY,
                },
                Rule {
                    intent: Intent::Pricing,
                    keywords: &["pricing", "cost"],
                    reply: PRICING_REPLY,
                },
                Rule {
                    intent: Intent::Upload,
                    keywords: &["upload", "data"],
                    reply: UPLOAD_REPLY,
                },
                Rule {
                    intent: Intent::Alerts,
                    keywords: &["alert"],
                    reply: ALERTS_REPLY,
                },
            ],
            FALLBACK_REPLY,
        )
    }

    /// Custom table; keywords are expected in lowercase
    pub fn with_rules(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    fn select(&self, input: &str) -> Option<&Rule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn intent(&self, input: &str) -> Intent {
        self.select(input)
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Fallback)
    }

    pub fn reply(&self, input: &str) -> &'static str {
        self.select(input)
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback)
    }

    /// Append the user message and the chosen reply to the session history.
    ///
    /// Empty input appends nothing and returns `None`. Anything else,
    /// whitespace included, is stored exactly as typed.
    pub fn respond(&self, input: &str, state: &mut SessionState) -> Option<&'static str> {
        if input.is_empty() {
            return None;
        }

        let reply = self.reply(input);
        state.push_message(ChatMessage::user(input));
        state.push_message(ChatMessage::assistant(reply));

        tracing::debug!(intent = ?self.intent(input), "Assistant replied");
        Some(reply)
    }
}
