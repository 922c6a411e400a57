//! Case-insensitive keyword matching.
//!
//! All communication heuristics are plain substring checks against fixed word
//! lists. There is no tokenization or stemming: "can" matches inside "cannot"
//! and "hi" matches inside "this".

/// A fixed list of lowercase keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon(&'static [&'static str]);

impl Lexicon {
    /// Creates a lexicon from lowercase keywords.
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self(words)
    }

    /// Returns the keywords in declaration order.
    pub fn words(&self) -> &'static [&'static str] {
        self.0
    }

    /// Returns true if any keyword occurs in the text.
    pub fn matches(&self, text: &NormalizedText<'_>) -> bool {
        self.0.iter().any(|word| text.contains(word))
    }
}

/// A piece of text paired with its lowercase form.
///
/// Lowercasing happens once per utterance instead of once per keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    original: &'a str,
    lower: String,
}

impl<'a> NormalizedText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lower: original.to_lowercase(),
        }
    }

    /// Returns the text exactly as it was written.
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Returns the lowercase form.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Case-insensitive substring check. `needle` must already be lowercase.
    pub fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.original.chars().count()
    }

    /// Number of pieces between single spaces.
    ///
    /// Only the space character separates words: newlines and tabs do not,
    /// and each extra space adds an empty piece.
    pub fn word_count(&self) -> usize {
        self.original.split(' ').count()
    }
}
