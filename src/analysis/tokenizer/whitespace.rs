//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
///
/// Runs of whitespace collapse, so leading, trailing and repeated separators
/// never produce empty words.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let words = tokenizer.tokenize("hello  world\ttest").unwrap();
        assert_eq!(words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let words = tokenizer.tokenize("  quick brown \n").unwrap();
        assert_eq!(words, vec!["quick", "brown"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize(" \t ").unwrap().is_empty());
    }

    #[test]
    fn test_unicode_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let words = tokenizer.tokenize("café\u{00A0}au\u{2003}lait").unwrap();
        assert_eq!(words, vec!["café", "au", "lait"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
