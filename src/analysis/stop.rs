//! Stop-word sets and the providers that load them.
//!
//! A [`StopWords`] set is loaded once, for one language, and never changes
//! afterwards. Providers implement [`StopWordProvider`]:
//!
//! - [`BuiltinStopWords`] ships the English list compiled into the crate.
//! - [`DirectoryStopWords`] reads `<root>/<language>` files laid out like the
//!   NLTK `stopwords` corpus (one word per line).
//!
//! # Examples
//!
//! ```
//! use lexaug::analysis::stop::{BuiltinStopWords, StopWordProvider};
//!
//! let stop_words = BuiltinStopWords.load("english").unwrap();
//! assert!(stop_words.contains("the"));
//! assert!(!stop_words.contains("fox"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use log::{debug, info};

use crate::error::{LexaugError, Result};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// An immutable set of stop words for one language.
///
/// Cloning is cheap; clones share the underlying set.
#[derive(Clone, Debug)]
pub struct StopWords {
    language: String,
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Create a stop-word set from an existing set of words.
    pub fn new<S: Into<String>>(language: S, words: HashSet<String>) -> Self {
        StopWords {
            language: language.into(),
            words: Arc::new(words),
        }
    }

    /// Create a stop-word set from a list of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexaug::analysis::stop::StopWords;
    ///
    /// let stop_words = StopWords::from_words("custom", vec!["foo", "bar", "foo"]);
    /// assert_eq!(stop_words.len(), 2);
    /// ```
    pub fn from_words<L, I, S>(language: L, words: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(language, words.into_iter().map(|s| s.into()).collect())
    }

    /// An empty stop-word set; every word is a replacement candidate.
    pub fn empty() -> Self {
        Self::new("none", HashSet::new())
    }

    /// Check if a word is a stop word. Matching is exact (case-sensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The language this set was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Source of stop-word sets, called once when an augmenter is built.
pub trait StopWordProvider {
    /// Load the stop words for `language`.
    ///
    /// Fails with a resource error when the language is not available.
    fn load(&self, language: &str) -> Result<StopWords>;
}

/// Provider backed by the lists compiled into the crate (English only).
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinStopWords;

impl StopWordProvider for BuiltinStopWords {
    fn load(&self, language: &str) -> Result<StopWords> {
        match language.to_lowercase().as_str() {
            "english" | "en" => Ok(StopWords::new(
                "english",
                DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            )),
            other => Err(LexaugError::resource(format!(
                "No built-in stop-word list for language '{other}'"
            ))),
        }
    }
}

/// Provider reading one file per language from a directory.
#[derive(Clone, Debug)]
pub struct DirectoryStopWords {
    root: PathBuf,
}

impl DirectoryStopWords {
    /// Create a provider rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirectoryStopWords {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The directory this provider reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StopWordProvider for DirectoryStopWords {
    fn load(&self, language: &str) -> Result<StopWords> {
        let path = self.root.join(language);
        debug!("Loading stop words from {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| {
            LexaugError::resource(format!(
                "Failed to read stop-word file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let stop_words = StopWords::from_words(
            language,
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        info!(
            "Loaded {} stop words for '{}'",
            stop_words.len(),
            language
        );

        Ok(stop_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_english() {
        let stop_words = BuiltinStopWords.load("english").unwrap();
        assert_eq!(stop_words.language(), "english");
        assert_eq!(stop_words.len(), 179);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("wouldn't"));
        assert!(!stop_words.contains("The"));
        assert!(!stop_words.contains("quick"));
    }

    #[test]
    fn test_builtin_unknown_language() {
        let err = BuiltinStopWords.load("klingon").unwrap_err();
        assert!(matches!(err, LexaugError::Resource(_)));
    }

    #[test]
    fn test_directory_provider() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pirate"), "arr\n\n  ye \nmatey\n").unwrap();

        let provider = DirectoryStopWords::new(dir.path());
        let stop_words = provider.load("pirate").unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("ye"));
        assert!(!stop_words.contains(""));
    }

    #[test]
    fn test_directory_provider_missing_language() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryStopWords::new(dir.path());
        let err = provider.load("english").unwrap_err();
        assert!(matches!(err, LexaugError::Resource(_)));
    }

    #[test]
    fn test_empty_set() {
        let stop_words = StopWords::empty();
        assert!(stop_words.is_empty());
        assert!(!stop_words.contains("the"));
    }
}
