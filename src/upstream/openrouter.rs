//! OpenRouter-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use super::{CompletionClient, UpstreamConfig};
use crate::error::{Error, Result, UpstreamError};

/// HTTP client for an OpenRouter-style chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: HttpClient,
    config: UpstreamConfig,
}

impl OpenRouterClient {
    /// Creates a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be built.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Returns the connection settings.
    #[must_use]
    pub const fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    fn build_request(&self, system_prompt: &str, user_message: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_message),
            ],
        }
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            Error::config("OPENROUTER_API_KEY environment variable is missing")
        })?;

        debug!(model = %self.config.model, "sending completion request");

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&self.build_request(system_prompt, user_message))
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(UpstreamError::from)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(status = status.as_u16(), %body, "upstream returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse = serde_json::from_slice(&bytes).map_err(UpstreamError::from)?;
        Ok(parsed.into_text())
    }
}
