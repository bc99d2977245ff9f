//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use serde::Serialize;
use std::fmt::Write;

use crate::core::Chunk;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a chunk sequence.
#[must_use]
pub fn format_chunks(chunks: &[Chunk], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks),
        OutputFormat::Json => format_json(&ChunkListing::new(chunks)),
    }
}

fn format_chunks_text(chunks: &[Chunk]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{} chunk(s)", chunks.len());
    for (index, chunk) in chunks.iter().enumerate() {
        let _ = writeln!(
            output,
            "\n--- chunk {index} ({} chars, {} lines{}) ---",
            chunk.char_len(),
            chunk.line_count(),
            if chunk.hard_split { ", hard split" } else { "" }
        );
        let _ = writeln!(output, "{chunk}");
    }
    output
}

#[derive(Serialize)]
struct ChunkListing<'a> {
    count: usize,
    chunks: Vec<ChunkEntry<'a>>,
}

#[derive(Serialize)]
struct ChunkEntry<'a> {
    index: usize,
    chars: usize,
    lines: usize,
    hard_split: bool,
    content: &'a str,
}

impl<'a> ChunkListing<'a> {
    fn new(chunks: &'a [Chunk]) -> Self {
        Self {
            count: chunks.len(),
            chunks: chunks
                .iter()
                .enumerate()
                .map(|(index, chunk)| ChunkEntry {
                    index,
                    chars: chunk.char_len(),
                    lines: chunk.line_count(),
                    hard_split: chunk.hard_split,
                    content: chunk.as_str(),
                })
                .collect(),
        }
    }
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &crate::error::Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({
            "error": error.to_string(),
        })),
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Text);
    }

    #[test]
    fn test_format_chunks_text() {
        let chunks = vec![Chunk::from("a\nb"), Chunk::hard_split("ccc".to_string())];
        let output = format_chunks(&chunks, OutputFormat::Text);
        assert!(output.starts_with("2 chunk(s)"));
        assert!(output.contains("--- chunk 0 (3 chars, 2 lines) ---"));
        assert!(output.contains("--- chunk 1 (3 chars, 1 lines, hard split) ---"));
    }

    #[test]
    fn test_format_chunks_json() {
        let chunks = vec![Chunk::from("hello")];
        let output = format_chunks(&chunks, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["chunks"][0]["content"], "hello");
        assert_eq!(value["chunks"][0]["hard_split"], false);
    }

    #[test]
    fn test_format_error_json() {
        let err = crate::error::Error::config("bad");
        let output = format_error(&err, OutputFormat::Json);
        assert!(output.contains("configuration error: bad"));
    }
}
