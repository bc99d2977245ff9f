//! Query relay.
//!
//! Ties one query to one upstream call and turns the reply into chunks: the
//! first is returned right away, the rest are parked in the shared
//! pagination buffer for later `next` requests.

use std::collections::VecDeque;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::chunking::{Chunker, LineChunker, reconcile_front};
use crate::config::Config;
use crate::core::{Chunk, ContentFilter, DEFAULT_RESERVED_USERNAME, Persona};
use crate::error::{Error, Result, ValidationError};
use crate::pagination::PaginationStore;
use crate::upstream::CompletionClient;

/// Chunk served in place of a reply that tripped the content filter.
pub const APOLOGY: &str = "Sorry, I can't provide a response to that. 🙃";

/// Query-string parameters of a relay request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryParams {
    /// The user's message.
    pub query: Option<String>,
    /// Chat username, used for persona selection.
    pub username: Option<String>,
}

impl QueryParams {
    /// Creates parameters with both fields set.
    pub fn new(query: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            username: Some(username.into()),
        }
    }

    /// Returns `(query, username)` if both are present and non-empty.
    ///
    /// Whitespace-only values count as present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingParameter`] naming the first
    /// missing field.
    pub fn validate(&self) -> std::result::Result<(&str, &str), ValidationError> {
        let query = required(self.query.as_deref(), "query")?;
        let username = required(self.username.as_deref(), "username")?;
        Ok((query, username))
    }
}

fn required<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> std::result::Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingParameter { name })
}

/// Relays queries upstream and pages the replies.
pub struct Relay {
    client: Arc<dyn CompletionClient>,
    chunker: Box<dyn Chunker>,
    filter: ContentFilter,
    reserved_username: String,
    store: PaginationStore,
}

impl Relay {
    /// Creates a relay with default chunk limits, filter and persona name.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            chunker: Box::new(LineChunker::new()),
            filter: ContentFilter::default(),
            reserved_username: DEFAULT_RESERVED_USERNAME.to_string(),
            store: PaginationStore::new(),
        }
    }

    /// Creates a relay from loaded configuration.
    pub fn from_config(config: &Config, client: Arc<dyn CompletionClient>) -> Self {
        Self::new(client)
            .with_chunker(LineChunker::with_limits(config.limits))
            .with_filter(ContentFilter::new(&config.banned_words))
            .with_reserved_username(config.reserved_username.clone())
    }

    /// Replaces the chunking strategy.
    #[must_use]
    pub fn with_chunker(mut self, chunker: impl Chunker + 'static) -> Self {
        self.chunker = Box::new(chunker);
        self
    }

    /// Replaces the content filter.
    #[must_use]
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the username that selects the reserved persona.
    #[must_use]
    pub fn with_reserved_username(mut self, username: impl Into<String>) -> Self {
        self.reserved_username = username.into();
        self
    }

    /// Returns the shared pagination buffer.
    #[must_use]
    pub const fn store(&self) -> &PaginationStore {
        &self.store
    }

    /// Handles one query and returns the first chunk's text.
    ///
    /// The credential is checked before the parameters. An empty reply
    /// yields an empty string and an empty buffer.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] without an upstream credential,
    /// [`Error::Validation`] for missing parameters, and
    /// [`Error::Upstream`] when the completion call fails. The pagination
    /// buffer is left untouched on error.
    pub async fn query(&self, params: &QueryParams) -> Result<String> {
        if !self.client.is_configured() {
            warn!("upstream credential is not configured");
            return Err(Error::config(
                "OPENROUTER_API_KEY environment variable is missing",
            ));
        }
        let (query, username) = params.validate()?;

        let persona = Persona::resolve(username, &self.reserved_username);
        info!(persona = persona.name(), "relaying query upstream");

        let reply = self.client.complete(persona.system_prompt(), query).await?;

        Ok(self
            .paginate(&reply)
            .map(Chunk::into_content)
            .unwrap_or_default())
    }

    /// Segments `reply`, parks everything after the first chunk, and
    /// returns the first chunk.
    ///
    /// If any chunk contains a banned term, the whole reply is replaced by
    /// a single apology chunk and nothing is parked.
    pub fn paginate(&self, reply: &str) -> Option<Chunk> {
        let chunks = self.chunker.chunk(reply, None);
        let safe = chunks.iter().all(|c| self.filter.is_safe(c.as_str()));

        let mut chunks: VecDeque<Chunk> = if safe {
            chunks.into()
        } else {
            warn!("reply rejected by content filter");
            VecDeque::from([Chunk::from(APOLOGY)])
        };

        reconcile_front(&mut chunks);
        let first = chunks.pop_front();
        info!(
            chunks = chunks.len() + usize::from(first.is_some()),
            "reply segmented"
        );
        self.store.reset(chunks);
        first
    }

    /// Serves the next parked chunk, if any.
    pub fn next_chunk(&self) -> Option<Chunk> {
        self.store.take_next()
    }
}

impl std::fmt::Debug for Relay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("chunker", &self.chunker.name())
            .field("filter", &self.filter)
            .field("reserved_username", &self.reserved_username)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::ChunkLimits;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with canned text and records the prompts it was given.
    struct CannedClient {
        reply: String,
        configured: bool,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedClient {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                configured: true,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String> {
            self.seen
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_message.to_string()));
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_validate_params() {
        assert!(QueryParams::new("hi", "bob").validate().is_ok());

        let missing_query = QueryParams {
            query: None,
            username: Some("bob".into()),
        };
        assert_eq!(
            missing_query.validate(),
            Err(ValidationError::MissingParameter { name: "query" })
        );

        let empty_username = QueryParams::new("hi", "");
        assert_eq!(
            empty_username.validate(),
            Err(ValidationError::MissingParameter { name: "username" })
        );
    }

    #[test]
    fn test_whitespace_params_are_present() {
        let params = QueryParams::new(" ", "  ");
        assert_eq!(params.validate(), Ok((" ", "  ")));
    }

    #[tokio::test]
    async fn test_query_returns_first_chunk_and_parks_rest() {
        let client = CannedClient::new("a\nb\nc\nd\ne");
        let relay =
            Relay::new(client).with_chunker(LineChunker::with_limits(ChunkLimits::new(500, 2)));

        let first = relay.query(&QueryParams::new("hi", "viewer")).await.unwrap();
        assert_eq!(first, "a\nb");
        assert_eq!(relay.store().len(), 2);
        assert_eq!(relay.next_chunk(), Some(Chunk::from("c\nd")));
        assert_eq!(relay.next_chunk(), Some(Chunk::from("e")));
        assert_eq!(relay.next_chunk(), None);
    }

    #[tokio::test]
    async fn test_query_selects_persona_prompt() {
        let client = CannedClient::new("ok");
        let relay = Relay::new(client.clone()).with_reserved_username("boss");

        relay.query(&QueryParams::new("one", "BOSS")).await.unwrap();
        relay.query(&QueryParams::new("two", "someone")).await.unwrap();

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen[0].0, Persona::Reserved.system_prompt());
        assert_eq!(seen[0].1, "one");
        assert_eq!(seen[1].0, Persona::Standard.system_prompt());
    }

    #[tokio::test]
    async fn test_credential_checked_before_params() {
        let client = Arc::new(CannedClient {
            reply: String::new(),
            configured: false,
            seen: Mutex::new(Vec::new()),
        });
        let relay = Relay::new(client);
        let err = relay.query(&QueryParams::default()).await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_missing_params_leave_buffer_alone() {
        let relay = Relay::new(CannedClient::new("unused"));
        relay.store().reset(vec![Chunk::from("parked")]);

        let err = relay.query(&QueryParams::default()).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(relay.store().len(), 1);
    }

    #[test]
    fn test_paginate_empty_reply_clears_buffer() {
        let relay = Relay::new(CannedClient::new(""));
        relay.store().reset(vec![Chunk::from("stale")]);
        assert_eq!(relay.paginate(""), None);
        assert!(relay.store().is_empty());
    }

    #[test]
    fn test_paginate_reconciles_first_pair() {
        let relay = Relay::new(CannedClient::new(""))
            .with_chunker(LineChunker::with_limits(ChunkLimits::new(500, 3)));
        // The blank line makes "c" reappear at the head of the second chunk.
        let first = relay.paginate("a\n\nb\nc\nd").unwrap();
        assert_eq!(first.as_str(), "a\nb\nc");
        assert_eq!(relay.store().snapshot(), vec![Chunk::from("d")]);
    }

    #[test]
    fn test_paginate_leading_blank_window_serves_empty_first() {
        let relay = Relay::new(CannedClient::new(""));
        let reply = format!("{}{}", " ".repeat(600), "y".repeat(600));

        let first = relay.paginate(&reply).unwrap();
        assert!(first.is_empty());
        let parked: Vec<usize> = relay.store().snapshot().iter().map(Chunk::char_len).collect();
        assert_eq!(parked, vec![500, 100]);
    }

    #[test]
    fn test_paginate_banned_term_replaces_everything() {
        let relay = Relay::new(CannedClient::new(""))
            .with_chunker(LineChunker::with_limits(ChunkLimits::new(500, 1)))
            .with_filter(ContentFilter::new(["forbidden"]));

        let first = relay.paginate("fine\nstill fine\nsomething FORBIDDEN here");
        assert_eq!(first, Some(Chunk::from(APOLOGY)));
        assert!(relay.store().is_empty());
    }
}
