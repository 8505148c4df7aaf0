//! Tokenizer implementations for text analysis.

use crate::error::Result;

/// Trait for tokenizers that split a sentence into words.
pub trait Tokenizer: Send + Sync {
    /// Split the given text into words, in sentence order.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
