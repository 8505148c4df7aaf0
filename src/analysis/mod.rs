//! Text analysis module for lexaug.
//!
//! This module provides the pieces the augmenter runs a sentence through:
//! char filters for optional cleaning, a whitespace tokenizer, stop-word
//! sets, and the synonym resolvers.

pub mod char_filter;
pub mod stop;
pub mod synonym;
pub mod tokenizer;

// Re-export commonly used types
pub use char_filter::*;
pub use stop::*;
pub use synonym::{SynonymDictionary, SynonymResolver, WordNet, normalize_lemma};
pub use tokenizer::*;
