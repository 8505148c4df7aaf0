//! In-memory synonym dictionary organized by senses.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::info;

use super::SynonymResolver;

use crate::error::{LexaugError, Result};

/// Synonym dictionary made of senses.
///
/// A sense is a group of lemmas that share one meaning. A word may belong to
/// several senses; looking it up returns the lemmas of all of them.
///
/// Lemmas are stored as given (for example `"king_size"`). Lookups are
/// case-insensitive and treat spaces and underscores alike.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    /// Lemma groups, one per sense
    senses: Vec<Vec<String>>,
    /// Lookup key -> indices into `senses`
    index: AHashMap<String, Vec<usize>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from sense groups. Empty groups are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexaug::analysis::synonym::{SynonymDictionary, SynonymResolver};
    ///
    /// let dict = SynonymDictionary::from_senses(vec![
    ///     vec!["quick".to_string(), "speedy".to_string()],
    ///     vec!["quick".to_string(), "ready".to_string()],
    /// ]);
    /// assert_eq!(dict.lookup("quick").unwrap(), vec!["quick", "speedy", "quick", "ready"]);
    /// ```
    pub fn from_senses(senses: Vec<Vec<String>>) -> Self {
        let mut dict = Self::new();
        for sense in senses {
            dict.add_sense(sense);
        }
        dict
    }

    /// Load a dictionary from a JSON file.
    ///
    /// The JSON file contains an array of senses, each an array of lemmas:
    ///
    /// ```json
    /// [
    ///   ["quick", "speedy", "fast"],
    ///   ["king_size", "king-sized", "large"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexaugError::resource(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let senses: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            LexaugError::parse(format!(
                "Failed to parse synonym dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dict = Self::from_senses(senses);
        info!(
            "Loaded {} senses ({} words) from {}",
            dict.sense_count(),
            dict.word_count(),
            path.display()
        );
        Ok(dict)
    }

    /// Add one sense. Empty groups are ignored.
    pub fn add_sense(&mut self, lemmas: Vec<String>) {
        if lemmas.is_empty() {
            return;
        }

        let sense_id = self.senses.len();
        for lemma in &lemmas {
            let entry = self.index.entry(Self::lookup_key(lemma)).or_default();
            if entry.last() != Some(&sense_id) {
                entry.push(sense_id);
            }
        }
        self.senses.push(lemmas);
    }

    /// Iterate over the senses containing `word`.
    pub fn senses_of<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a [String]> + use<'a> {
        let senses = &self.senses;
        self.index
            .get(&Self::lookup_key(word))
            .into_iter()
            .flatten()
            .filter_map(move |&id| senses.get(id).map(Vec::as_slice))
    }

    /// Number of senses in the dictionary.
    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    /// Number of distinct lookup keys in the dictionary.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }

    /// Check if the dictionary has no senses.
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    fn lookup_key(word: &str) -> String {
        word.trim().to_lowercase().replace(' ', "_")
    }
}

impl SynonymResolver for SynonymDictionary {
    fn lookup(&self, word: &str) -> Result<Vec<String>> {
        Ok(self.senses_of(word).flatten().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
