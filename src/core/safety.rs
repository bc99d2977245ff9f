//! Banned-term content filter.

/// Terms rejected when no list is configured.
///
/// These are placeholders that block nothing real. The deployed list comes
/// from `BANNED_WORDS` (comma-separated), which replaces this one entirely.
pub const DEFAULT_BANNED_WORDS: &[&str] = &["badword1", "badword2"];

/// Case-insensitive substring filter over generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFilter {
    banned: Vec<String>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS.iter().copied())
    }
}

impl ContentFilter {
    /// Builds a filter from a list of terms. Blank terms are ignored.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { banned }
    }

    /// Returns `true` if `text` contains none of the banned terms.
    #[must_use]
    pub fn is_safe(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        !self.banned.iter().any(|term| lowered.contains(term.as_str()))
    }

    /// Number of configured terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.banned.len()
    }

    /// Returns `true` if no terms are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }
}
