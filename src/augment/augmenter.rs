//! The text augmenter.
//!
//! [`Augmenter`] implements the four Easy Data Augmentation operations over
//! a whitespace-tokenized sentence:
//!
//! - [`synonym_replacement`](Augmenter::synonym_replacement)
//! - [`random_insertion`](Augmenter::random_insertion)
//! - [`random_deletion`](Augmenter::random_deletion)
//! - [`random_swap`](Augmenter::random_swap)
//!
//! Every operation tokenizes its input into a private working copy and
//! returns a new string joined with single spaces. The random source lives
//! inside the augmenter and can be seeded for reproducible output.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexaug::analysis::stop::BuiltinStopWords;
//! use lexaug::analysis::synonym::SynonymDictionary;
//! use lexaug::augment::{AugmentConfig, Augmenter};
//!
//! let dictionary = SynonymDictionary::from_senses(vec![vec![
//!     "quick".to_string(),
//!     "speedy".to_string(),
//! ]]);
//! let config = AugmentConfig::default().with_seed(42);
//! let augmenter =
//!     Augmenter::with_config(&BuiltinStopWords, Arc::new(dictionary), config).unwrap();
//!
//! let augmented = augmenter.synonym_replacement("the quick fox", 1).unwrap();
//! assert_eq!(augmented, "the speedy fox");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use super::config::{AugmentConfig, validate_probability};
use super::operation::Operation;
use crate::analysis::char_filter::{CharFilter, CleanCharFilter};
use crate::analysis::stop::{StopWordProvider, StopWords};
use crate::analysis::synonym::{SynonymResolver, normalize_lemma};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Easy Data Augmentation over single sentences.
pub struct Augmenter {
    stop_words: StopWords,
    resolver: Arc<dyn SynonymResolver>,
    tokenizer: WhitespaceTokenizer,
    cleaner: CleanCharFilter,
    config: AugmentConfig,
    rng: Mutex<StdRng>,
}

impl Augmenter {
    /// Create an augmenter with the default configuration.
    ///
    /// Stop words for English are loaded from `provider`; a provider that
    /// cannot supply them makes construction fail.
    pub fn new<P>(provider: &P, resolver: Arc<dyn SynonymResolver>) -> Result<Self>
    where
        P: StopWordProvider + ?Sized,
    {
        Self::with_config(provider, resolver, AugmentConfig::default())
    }

    /// Create an augmenter, loading stop words for `config.language`.
    pub fn with_config<P>(
        provider: &P,
        resolver: Arc<dyn SynonymResolver>,
        config: AugmentConfig,
    ) -> Result<Self>
    where
        P: StopWordProvider + ?Sized,
    {
        config.validate()?;
        let stop_words = provider.load(&config.language)?;
        Self::from_parts(stop_words, resolver, config)
    }

    /// Create an augmenter from an already loaded stop-word set.
    pub fn from_parts(
        stop_words: StopWords,
        resolver: Arc<dyn SynonymResolver>,
        config: AugmentConfig,
    ) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(
            "Augmenter ready: {} stop words ({}), resolver '{}'",
            stop_words.len(),
            stop_words.language(),
            resolver.name()
        );

        Ok(Augmenter {
            stop_words,
            resolver,
            tokenizer: WhitespaceTokenizer::new(),
            cleaner: CleanCharFilter::new()?,
            config,
            rng: Mutex::new(rng),
        })
    }

    /// Reset the random source to a fixed seed.
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
    }

    /// The configuration this augmenter was built with.
    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// The stop words excluded from synonym replacement.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Collect the replacement candidates for `word`.
    ///
    /// Lemmas from every sense are normalized with [`normalize_lemma`],
    /// deduplicated in first-seen order, and the word itself (compared in
    /// lowercase) is removed. Candidates with no letters left are dropped.
    pub fn get_synonyms(&self, word: &str) -> Result<Vec<String>> {
        let lowered = word.to_lowercase();
        let normalized = normalize_lemma(word);
        let mut seen = HashSet::new();
        let mut synonyms = Vec::new();

        for lemma in self.resolver.lookup(word)? {
            let candidate = normalize_lemma(&lemma);
            if candidate.trim().is_empty() || candidate == lowered || candidate == normalized {
                continue;
            }
            if seen.insert(candidate.clone()) {
                synonyms.push(candidate);
            }
        }

        Ok(synonyms)
    }

    /// Replace up to `max_replacements` distinct non-stop words with synonyms.
    ///
    /// Candidates are the distinct non-stop words of the sentence, visited in
    /// random order. Each visited word that has synonyms is replaced, at every
    /// occurrence, by one randomly chosen synonym.
    pub fn synonym_replacement(&self, sentence: &str, max_replacements: usize) -> Result<String> {
        let mut words = self.tokenizer.tokenize(sentence)?;
        let mut candidates = self.replacement_candidates(&words);

        let mut rng = self.rng.lock();
        candidates.shuffle(&mut *rng);

        let mut replaced = 0;
        for candidate in &candidates {
            if replaced >= max_replacements {
                break;
            }

            let synonyms = self.get_synonyms(candidate)?;
            let Some(synonym) = synonyms.choose(&mut *rng) else {
                continue;
            };

            for word in words.iter_mut() {
                if *word == *candidate {
                    *word = synonym.clone();
                }
            }
            debug!("Replaced '{candidate}' with '{synonym}'");
            replaced += 1;
        }

        Ok(words.join(" "))
    }

    /// Insert a synonym of a random word at a random position, `n` times.
    ///
    /// Each insertion tries up to `insertion_attempts` random words; when none
    /// of them has a synonym the insertion is skipped.
    pub fn random_insertion(&self, sentence: &str, n: usize) -> Result<String> {
        let mut words = self.tokenizer.tokenize(sentence)?;
        if words.is_empty() {
            return Ok(String::new());
        }

        let mut rng = self.rng.lock();
        for _ in 0..n {
            self.insert_synonym(&mut words, &mut rng)?;
        }

        Ok(words.join(" "))
    }

    /// Drop each word independently with probability `p`.
    ///
    /// A one-word sentence is returned unchanged. If every word is dropped,
    /// one random word of the original sentence is returned instead.
    pub fn random_deletion(&self, sentence: &str, p: f64) -> Result<String> {
        validate_probability(p)?;

        let words = self.tokenizer.tokenize(sentence)?;
        if words.len() <= 1 {
            return Ok(words.join(" "));
        }

        let mut rng = self.rng.lock();
        let mut kept = Vec::with_capacity(words.len());
        for word in &words {
            if rng.random::<f64>() > p {
                kept.push(word.as_str());
            }
        }

        if kept.is_empty() {
            let survivor = &words[rng.random_range(0..words.len())];
            debug!("Every word deleted, keeping '{survivor}'");
            return Ok(survivor.clone());
        }

        Ok(kept.join(" "))
    }

    /// Swap two random words, `n` times.
    ///
    /// A swap draws the second index up to `swap_attempts` times looking for
    /// one different from the first; otherwise that swap is abandoned.
    /// Sentences shorter than two words are returned unchanged.
    pub fn random_swap(&self, sentence: &str, n: usize) -> Result<String> {
        let mut words = self.tokenizer.tokenize(sentence)?;
        if words.len() < 2 {
            return Ok(words.join(" "));
        }

        let mut rng = self.rng.lock();
        for _ in 0..n {
            self.swap_words(&mut words, &mut rng);
        }

        Ok(words.join(" "))
    }

    /// Strip punctuation and lowercase a sentence before augmentation.
    ///
    /// See [`CleanCharFilter`]. None of the operations call this themselves.
    pub fn clean(&self, sentence: &str) -> String {
        self.cleaner.filter(sentence)
    }

    /// Run one operation with the parameters from the configuration.
    pub fn apply(&self, operation: Operation, sentence: &str) -> Result<String> {
        match operation {
            Operation::SynonymReplacement => {
                self.synonym_replacement(sentence, self.config.max_replacements)
            }
            Operation::RandomInsertion => self.random_insertion(sentence, self.config.insertions),
            Operation::RandomDeletion => {
                self.random_deletion(sentence, self.config.deletion_probability)
            }
            Operation::RandomSwap => self.random_swap(sentence, self.config.swaps),
        }
    }

    /// Run several operations in sequence, each on the previous output.
    pub fn apply_chain(&self, operations: &[Operation], sentence: &str) -> Result<String> {
        let mut current = self.tokenizer.tokenize(sentence)?.join(" ");
        for &operation in operations {
            current = self.apply(operation, &current)?;
        }
        Ok(current)
    }

    /// Produce `count` augmented variants of `sentence`.
    ///
    /// Variant `i` uses `config.operations[i % len]`.
    pub fn generate(&self, sentence: &str, count: usize) -> Result<Vec<String>> {
        let operations = &self.config.operations;
        (0..count)
            .map(|i| self.apply(operations[i % operations.len()], sentence))
            .collect()
    }

    fn replacement_candidates(&self, words: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for word in words {
            if !self.stop_words.contains(word) && seen.insert(word.as_str()) {
                candidates.push(word.clone());
            }
        }
        candidates
    }

    fn insert_synonym(&self, words: &mut Vec<String>, rng: &mut StdRng) -> Result<bool> {
        for _ in 0..self.config.insertion_attempts {
            let word = &words[rng.random_range(0..words.len())];
            if let Some(synonym) = self.get_synonyms(word)?.into_iter().next() {
                let position = rng.random_range(0..words.len());
                debug!("Inserting '{synonym}' at {position}");
                words.insert(position, synonym);
                return Ok(true);
            }
        }

        debug!(
            "No synonym found in {} attempts, skipping insertion",
            self.config.insertion_attempts
        );
        Ok(false)
    }

    fn swap_words(&self, words: &mut [String], rng: &mut StdRng) -> bool {
        let first = rng.random_range(0..words.len());
        let mut second = first;
        let mut attempts = 0;

        while second == first {
            if attempts >= self.config.swap_attempts {
                debug!("No distinct index in {attempts} attempts, skipping swap");
                return false;
            }
            second = rng.random_range(0..words.len());
            attempts += 1;
        }

        words.swap(first, second);
        true
    }
}
