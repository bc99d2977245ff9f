//! Wire types for the chat-completions API.

use serde::{Deserialize, Serialize};

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions ahead of the conversation.
    System,
    /// The caller's message.
    User,
    /// A model reply.
    Assistant,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// System prompt followed by the user message.
    pub messages: Vec<ChatMessage>,
}

/// Response body. Everything but the first choice's text is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    /// Generated alternatives.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One generated alternative.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    /// Generated message, absent on some error payloads.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Message of a choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text; `null` for tool-only replies.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, or the empty string.
    #[must_use]
    pub fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default()
    }
}
