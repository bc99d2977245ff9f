//! Reply segmentation.
//!
//! Splits generated text into chunks that fit a chat message, and strips
//! lines repeated across chunk boundaries.
//!
//! - **Lines**: packs whole trimmed lines under a character and line bound
//! - **Overlap**: removes a duplicated boundary line between adjacent chunks

pub mod lines;
pub mod overlap;
pub mod traits;

pub use lines::{LineChunker, split_response};
pub use overlap::{reconcile, reconcile_front};
pub use traits::{ChunkLimits, Chunker};

/// Default maximum chunk length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Default maximum number of lines per chunk.
pub const DEFAULT_MAX_LINES: usize = 3;
