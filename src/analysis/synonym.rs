//! Synonym lookup shared by the augmentation operations.
//!
//! A [`SynonymResolver`] maps a word to the lemma names of every sense it
//! belongs to. The resolver is a black box to the augmenter; this module
//! ships two backings for it:
//!
//! - [`SynonymDictionary`] built in memory or loaded from a JSON file of
//!   sense groups.
//! - [`WordNet`] loaded from WordNet database files, which also maps
//!   inflected words to their base forms.

pub mod dictionary;
pub mod wordnet;

pub use dictionary::SynonymDictionary;
pub use wordnet::{PartOfSpeech, WordNet};

use crate::error::Result;

/// Maps a word to the lemmas of all of its senses.
pub trait SynonymResolver: Send + Sync {
    /// Return every lemma of every sense that contains `word`, in sense order.
    ///
    /// The word itself is part of the result when it is a lemma of one of its
    /// senses. An unknown word yields an empty list, not an error.
    fn lookup(&self, word: &str) -> Result<Vec<String>>;

    /// Get the name of this resolver (for logging).
    fn name(&self) -> &'static str;
}

/// Normalize a raw lemma name into a replacement candidate.
///
/// Underscores and hyphens become spaces, the text is lowercased, and
/// everything except ASCII letters and spaces is dropped.
///
/// # Examples
///
/// ```
/// use lexaug::analysis::synonym::normalize_lemma;
///
/// assert_eq!(normalize_lemma("King_Size"), "king size");
/// assert_eq!(normalize_lemma("well-known"), "well known");
/// assert_eq!(normalize_lemma("catch-22"), "catch ");
/// ```
pub fn normalize_lemma(lemma: &str) -> String {
    lemma
        .replace(['_', '-'], " ")
        .to_lowercase()
        .chars()
        .filter(|c| *c == ' ' || c.is_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lemma() {
        assert_eq!(normalize_lemma("quick"), "quick");
        assert_eq!(normalize_lemma("New_York"), "new york");
        assert_eq!(normalize_lemma("o'clock"), "oclock");
        assert_eq!(normalize_lemma("3D"), "d");
        assert_eq!(normalize_lemma("42"), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize_lemma("Café"), "caf");
    }
}
