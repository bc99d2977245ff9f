//! Upstream completion API client.
//!
//! The relay needs one thing from the model provider: given a system prompt
//! and a user message, produce reply text or fail. [`CompletionClient`] is
//! that seam; [`OpenRouterClient`] is the HTTP implementation.

pub mod openrouter;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub use openrouter::OpenRouterClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gryphe/mythomax-l2-13b:free";

/// Default `HTTP-Referer` header value.
pub const DEFAULT_REFERER: &str = "https://your-render-app-url.onrender.com";

/// Default `X-Title` header value.
pub const DEFAULT_TITLE: &str = "CemBot API on Render";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A source of generated reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns `true` if a credential is available for the upstream call.
    fn is_configured(&self) -> bool;

    /// Generates a reply to `user_message` under `system_prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] without a credential, or
    /// [`crate::error::Error::Upstream`] if the call fails.
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

/// Upstream connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Chat-completions URL.
    pub api_url: String,
    /// Bearer credential. `None` makes every query fail with a
    /// configuration error.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// `HTTP-Referer` header value.
    pub referer: String,
    /// `X-Title` header value.
    pub title: String,
    /// Wall-clock timeout for the whole request.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
