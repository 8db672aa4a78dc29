use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::prompts::SYSTEM_PROMPT;

pub mod openai;

/// One entry in the chat exchange sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// The two-message exchange: fixed instruction block plus the caller's text.
pub fn build_messages(description: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(description),
    ]
}

/// An upstream capability that turns a chat exchange into completion text.
///
/// `Ok(None)` means the upstream answered but produced no usable text
/// (no choices, or an empty message); callers substitute their own fallback.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>>;
}
