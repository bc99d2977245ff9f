//! Chunk representation.
//!
//! A chunk is one display-safe piece of a generated reply: at most
//! `max_length` characters and `max_lines` trimmed, non-empty lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded piece of reply text, safe to send as one chat message.
///
/// # Examples
///
/// ```
/// use cembot_relay::core::Chunk;
///
/// let chunk = Chunk::new("first\nsecond".to_string());
/// assert_eq!(chunk.line_count(), 2);
/// assert_eq!(chunk.last_line(), "second");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk content, lines joined by `\n`.
    pub content: String,

    /// Whether the chunk was cut from an over-long line by raw character
    /// slicing rather than assembled from whole lines.
    pub hard_split: bool,
}

impl Chunk {
    /// Creates a chunk assembled from whole lines.
    #[must_use]
    pub const fn new(content: String) -> Self {
        Self {
            content,
            hard_split: false,
        }
    }

    /// Creates a chunk cut from an over-long line.
    #[must_use]
    pub const fn hard_split(content: String) -> Self {
        Self {
            content,
            hard_split: true,
        }
    }

    /// Returns the content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns the length in characters (not bytes).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Checks if the chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterates over the logical lines.
    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.content.split('\n')
    }

    /// Number of logical lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// First logical line, trimmed.
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.lines().next().unwrap_or_default().trim()
    }

    /// Last logical line, trimmed.
    #[must_use]
    pub fn last_line(&self) -> &str {
        self.content.rsplit('\n').next().unwrap_or_default().trim()
    }

    /// Consumes the chunk and returns its content.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for Chunk {
    fn from(content: &str) -> Self {
        Self::new(content.to_string())
    }
}

impl From<String> for Chunk {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_new() {
        let chunk = Chunk::new("Hello, world!".to_string());
        assert_eq!(chunk.as_str(), "Hello, world!");
        assert!(!chunk.hard_split);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_chunk_hard_split_flag() {
        let chunk = Chunk::hard_split("x".repeat(10));
        assert!(chunk.hard_split);
        assert_eq!(chunk.char_len(), 10);
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let chunk = Chunk::from("héllo 世界");
        assert_eq!(chunk.char_len(), 8);
        assert!(chunk.content.len() > 8);
    }

    #[test]
    fn test_first_and_last_line_are_trimmed() {
        let chunk = Chunk::from("  alpha  \nbeta\n  gamma ");
        assert_eq!(chunk.first_line(), "alpha");
        assert_eq!(chunk.last_line(), "gamma");
        assert_eq!(chunk.line_count(), 3);
    }

    #[test]
    fn test_single_line_chunk() {
        let chunk = Chunk::from("only");
        assert_eq!(chunk.first_line(), "only");
        assert_eq!(chunk.last_line(), "only");
        assert_eq!(chunk.line_count(), 1);
    }

    #[test]
    fn test_display_matches_content() {
        let chunk = Chunk::from("a\nb");
        assert_eq!(chunk.to_string(), "a\nb");
        assert_eq!(chunk.into_content(), "a\nb");
    }
}
