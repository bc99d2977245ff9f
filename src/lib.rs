//! # CemBot Relay
//!
//! HTTP relay between a chat bot and an OpenRouter-hosted LLM.
//!
//! A reply from the model is too long for a single chat message, so the relay
//! splits it into short chunks, hands the first chunk back to the caller and
//! parks the rest for retrieval one at a time through `/next`.
//!
//! ## Features
//!
//! - **Segmenter**: packs trimmed lines into chunks bounded by characters and lines
//! - **Overlap reconciler**: strips a repeated boundary line between chunks
//! - **Pagination store**: shared buffer of pending chunks
//! - **Personas**: a reserved username gets a dedicated system prompt
//! - **Content filter**: replies containing banned words become an apology

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod pagination;
pub mod relay;
pub mod server;
pub mod telemetry;
pub mod upstream;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Chunk, ContentFilter, Persona};

// Re-export chunking types
pub use chunking::{ChunkLimits, Chunker, LineChunker, reconcile, split_response};

// Re-export pagination and relay types
pub use pagination::{NO_MORE_CONTENT, PaginationStore};
pub use relay::{APOLOGY, QueryParams, Relay};

// Re-export upstream and server types
pub use config::Config;
pub use server::create_router;
pub use upstream::{CompletionClient, OpenRouterClient, UpstreamConfig};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
