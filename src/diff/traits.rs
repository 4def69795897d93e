//! Trait definitions for intra-line tokenization strategies.

use super::engine_config::InlineGranularity;
use super::tokenize::{split_chars, split_words};

/// Splits a single line into comparable tokens.
///
/// Implementations must be lossless: concatenating the returned tokens in
/// order gives back the input line.
pub trait Tokenizer: Send + Sync {
    /// Split `line` into tokens borrowed from it.
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str>;

    /// Get the name of this tokenizer for logging/debugging.
    fn name(&self) -> &str;
}

/// Word, whitespace-run and punctuation tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        split_words(line)
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// One token per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        split_chars(line)
    }

    fn name(&self) -> &str {
        "char"
    }
}

impl InlineGranularity {
    /// The tokenizer implementing this granularity.
    #[must_use]
    pub fn tokenizer(&self) -> &'static dyn Tokenizer {
        match self {
            Self::Word => &WordTokenizer,
            Self::Char => &CharTokenizer,
        }
    }
}
