//! Line-based chunking strategy.
//!
//! Packs whole trimmed lines into a chunk until either the character bound
//! or the line bound would be exceeded. A line that cannot fit on its own is
//! cut by raw character slicing.
//!
//! The remainder after a line-packed chunk is computed by line *position*:
//! exactly as many lines are dropped from the front as were packed, even when
//! some of the dropped positions held blank lines that were skipped. Blank
//! lines among the packed ones therefore leave the tail of the chunk in the
//! remainder, and it is emitted again at the head of the next chunk: one
//! line per blank position, up to the whole chunk minus its first line. The
//! overlap reconciler strips only one repeated line at delivery time, so with
//! two or more blank positions the rest of the repeat reaches the reader.

use crate::chunking::traits::{ChunkLimits, Chunker};
use crate::core::Chunk;

/// Line-packing chunker.
///
/// # Examples
///
/// ```
/// use cembot_relay::chunking::{ChunkLimits, Chunker, LineChunker};
///
/// let chunker = LineChunker::with_limits(ChunkLimits::new(20, 2));
/// let chunks = chunker.chunk("alpha\nbeta\ngamma", None);
/// assert_eq!(chunks[0].as_str(), "alpha\nbeta");
/// assert_eq!(chunks[1].as_str(), "gamma");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineChunker {
    limits: ChunkLimits,
}

impl LineChunker {
    /// Creates a chunker with default limits (500 chars, 3 lines).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chunker with custom limits.
    #[must_use]
    pub const fn with_limits(limits: ChunkLimits) -> Self {
        Self { limits }
    }

    /// Returns the configured limits.
    #[must_use]
    pub const fn limits(&self) -> ChunkLimits {
        self.limits
    }
}

impl Chunker for LineChunker {
    fn chunk(&self, text: &str, limits: Option<&ChunkLimits>) -> Vec<Chunk> {
        split_response(text, limits.copied().unwrap_or(self.limits))
    }

    fn name(&self) -> &'static str {
        "lines"
    }

    fn description(&self) -> &'static str {
        "Packs whole trimmed lines up to a character and line bound, hard-splitting over-long lines"
    }
}

/// Splits `text` into chunks bounded by `limits`.
///
/// Blank lines are dropped and every line is trimmed. Zero bounds are
/// treated as one. Whitespace-only text yields no chunks.
///
/// Leading whitespace is only trimmed after a cut, so a reply that opens
/// with a blank window at least `max_length` characters wide starts with an
/// empty hard-split chunk.
#[must_use]
pub fn split_response(text: &str, limits: ChunkLimits) -> Vec<Chunk> {
    let ChunkLimits {
        max_length,
        max_lines,
    } = limits.clamped();

    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let (content, packed) = pack_lines(remaining, max_length, max_lines);

        if packed == 0 {
            let cut = byte_offset_of_char(remaining, max_length);
            let piece = remaining[..cut].trim();
            remaining = remaining[cut..].trim();
            // An all-blank window is still a chunk unless nothing follows it.
            if !piece.is_empty() || !remaining.is_empty() {
                chunks.push(Chunk::hard_split(piece.to_string()));
            }
        } else {
            chunks.push(Chunk::new(content));
            remaining = skip_lines(remaining, packed).trim();
        }
    }

    chunks
}

/// Packs trimmed non-empty lines from the front of `text`.
///
/// Returns the packed content and the number of lines it holds.
fn pack_lines(text: &str, max_length: usize, max_lines: usize) -> (String, usize) {
    let mut content = String::new();
    let mut running = 0;
    let mut packed = 0;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let len = line.chars().count();
        if running + len + 1 > max_length || packed >= max_lines {
            break;
        }
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(line);
        running += len + 1;
        packed += 1;
    }

    (content, packed)
}

/// Drops the first `count` lines of `text` by position.
fn skip_lines(text: &str, count: usize) -> &str {
    if count == 0 {
        return text;
    }
    text.match_indices('\n')
        .nth(count - 1)
        .map_or("", |(idx, _)| &text[idx + 1..])
}

/// Byte offset just past the first `chars` characters of `text`.
fn byte_offset_of_char(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(idx, _)| idx)
}
