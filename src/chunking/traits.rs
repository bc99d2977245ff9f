//! Chunker trait definition.
//!
//! Defines the interface for segmentation strategies and the limits every
//! produced chunk must respect.

use crate::core::Chunk;
use crate::error::{Error, Result};

/// Trait for splitting reply text into display-safe chunks.
///
/// Implementations must be deterministic and total: every input string,
/// including the empty string, produces a (possibly empty) chunk list.
///
/// # Examples
///
/// ```
/// use cembot_relay::chunking::{Chunker, LineChunker};
///
/// let chunker = LineChunker::new();
/// let chunks = chunker.chunk("one\ntwo\nthree\nfour", None);
/// assert_eq!(chunks.len(), 2);
/// ```
pub trait Chunker: Send + Sync {
    /// Splits `text` into ordered chunks.
    ///
    /// `limits` overrides the chunker's own limits when given.
    fn chunk(&self, text: &str, limits: Option<&ChunkLimits>) -> Vec<Chunk>;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a description of the strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }
}

/// Upper bounds for a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLimits {
    /// Maximum chunk length in characters.
    pub max_length: usize,

    /// Maximum number of non-empty lines per chunk.
    pub max_lines: usize,
}

impl Default for ChunkLimits {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_LENGTH, super::DEFAULT_MAX_LINES)
    }
}

impl ChunkLimits {
    /// Creates limits without validation.
    #[must_use]
    pub const fn new(max_length: usize, max_lines: usize) -> Self {
        Self {
            max_length,
            max_lines,
        }
    }

    /// Creates limits, rejecting zero bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either bound is zero.
    pub fn checked(max_length: usize, max_lines: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::config("chunk max length must be > 0"));
        }
        if max_lines == 0 {
            return Err(Error::config("chunk max lines must be > 0"));
        }
        Ok(Self::new(max_length, max_lines))
    }

    /// Returns the limits with both bounds raised to at least one, so that
    /// segmentation always makes progress.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.max_length.max(1), self.max_lines.max(1))
    }
}
