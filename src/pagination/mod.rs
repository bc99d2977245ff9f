//! Server-held pagination of reply chunks.
//!
//! The first chunk of a reply is returned with the query response; the rest
//! wait here until the client asks for them one at a time.

pub mod store;

pub use store::PaginationStore;

/// Text served when a pagination request finds nothing waiting.
pub const NO_MORE_CONTENT: &str = "No additional response available. 🤷\u{200d}♂\u{fe0f}";
