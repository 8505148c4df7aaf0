//! Synonym resolver backed by WordNet database files.
//!
//! Reads the `data.noun`, `data.verb`, `data.adj` and `data.adv` files of a
//! WordNet distribution and keeps the lemma list of every synset; pointers
//! and glosses are skipped. The matching exception lists (`noun.exc`,
//! `verb.exc`, `adj.exc`, `adv.exc`) are read when present.
//!
//! A data line looks like
//!
//! ```text
//! 01155354 00 s 02 fast 0 quick 0 003 & 01154974 a 0000 ... | acting or moving quickly
//! ```
//!
//! i.e. `offset lex_filenum ss_type w_cnt {word lex_id}... p_cnt ...`, with
//! `w_cnt` in hexadecimal. Lines starting with two spaces are the license
//! header. An exception line is an inflected form followed by its base forms:
//!
//! ```text
//! geese goose
//! ```
//!
//! Lookups reduce inflected words to base forms the way WordNet's `morphy`
//! does: the exception list first, then suffix detachment rules, keeping only
//! candidates that are lemmas of the part of speech being searched.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};

use super::SynonymResolver;

use crate::error::{LexaugError, Result};

/// The four WordNet parts of speech, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech, in lookup order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// The file suffix WordNet uses for this part of speech.
    pub fn name(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Name of the synset data file, e.g. `data.noun`.
    pub fn data_file(&self) -> String {
        format!("data.{}", self.name())
    }

    /// Name of the exception list, e.g. `noun.exc`.
    pub fn exception_file(&self) -> String {
        format!("{}.exc", self.name())
    }

    /// Suffix detachment rules as `(suffix, replacement)` pairs.
    fn substitutions(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            PartOfSpeech::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            PartOfSpeech::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            PartOfSpeech::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            PartOfSpeech::Adverb => &[],
        }
    }

    /// Apply every matching rule once to every form.
    fn detach_suffixes(&self, forms: &[String]) -> Vec<String> {
        let mut detached = Vec::new();
        for form in forms {
            for &(suffix, replacement) in self.substitutions() {
                if let Some(stem) = form.strip_suffix(suffix)
                    && !stem.is_empty()
                {
                    detached.push(format!("{stem}{replacement}"));
                }
            }
        }
        detached
    }
}

/// Lemma and exception tables for one part of speech.
#[derive(Debug, Clone, Default)]
struct PosIndex {
    /// Lemma key -> indices into `WordNet::senses`
    lemmas: AHashMap<String, Vec<usize>>,
    /// Inflected form -> base forms
    exceptions: AHashMap<String, Vec<String>>,
}

impl PosIndex {
    /// Keep the forms that are lemmas here, deduplicated in order.
    fn known_forms<I: IntoIterator<Item = String>>(&self, forms: I) -> Vec<String> {
        let mut seen = AHashSet::new();
        forms
            .into_iter()
            .filter(|form| self.lemmas.contains_key(form) && seen.insert(form.clone()))
            .collect()
    }
}

/// WordNet synsets indexed by part of speech.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    senses: Vec<Vec<String>>,
    indexes: [PosIndex; 4],
}

impl WordNet {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the data and exception files found in a WordNet `dict` directory.
    ///
    /// Missing part-of-speech files are skipped; a directory without any data
    /// file is a resource error.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut wordnet = WordNet::new();
        let mut files_read = 0;

        for pos in PartOfSpeech::ALL {
            let name = pos.data_file();
            let path = dir.join(&name);
            if !path.is_file() {
                debug!("WordNet file {} not found, skipping", path.display());
                continue;
            }

            let synsets = wordnet.read_data(pos, BufReader::new(File::open(&path)?), &name)?;
            debug!("Read {synsets} synsets from {}", path.display());
            files_read += 1;

            let name = pos.exception_file();
            let path = dir.join(&name);
            if path.is_file() {
                let exceptions =
                    wordnet.read_exceptions(pos, BufReader::new(File::open(&path)?), &name)?;
                debug!("Read {exceptions} exceptions from {}", path.display());
            }
        }

        if files_read == 0 {
            return Err(LexaugError::resource(format!(
                "No WordNet data files found in '{}'",
                dir.display()
            )));
        }

        info!(
            "Loaded WordNet from {}: {} synsets, {} lemmas",
            dir.display(),
            wordnet.sense_count(),
            wordnet.lemma_count()
        );
        Ok(wordnet)
    }

    /// Read synsets for `pos` from one data file.
    ///
    /// `source` names the input in error messages. Returns the number of
    /// synsets read.
    pub fn read_data<R: BufRead>(
        &mut self,
        pos: PartOfSpeech,
        reader: R,
        source: &str,
    ) -> Result<usize> {
        let mut synsets = 0;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with("  ") || line.trim().is_empty() {
                continue;
            }

            let lemmas = parse_data_line(&line).map_err(|msg| {
                LexaugError::parse(format!("{source}, line {}: {msg}", line_num + 1))
            })?;
            self.add_synset(pos, lemmas);
            synsets += 1;
        }

        Ok(synsets)
    }

    /// Read the exception list for `pos`. Returns the number of entries read.
    pub fn read_exceptions<R: BufRead>(
        &mut self,
        pos: PartOfSpeech,
        reader: R,
        source: &str,
    ) -> Result<usize> {
        let mut entries = 0;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(inflected) = fields.next() else {
                continue;
            };

            let bases: Vec<String> = fields.map(lookup_key).collect();
            if bases.is_empty() {
                return Err(LexaugError::parse(format!(
                    "{source}, line {}: '{inflected}' has no base form",
                    line_num + 1
                )));
            }
            self.indexes[pos as usize]
                .exceptions
                .insert(lookup_key(inflected), bases);
            entries += 1;
        }

        Ok(entries)
    }

    /// Add one synset. Empty lemma lists are ignored.
    pub fn add_synset(&mut self, pos: PartOfSpeech, lemmas: Vec<String>) {
        if lemmas.is_empty() {
            return;
        }

        let sense_id = self.senses.len();
        let index = &mut self.indexes[pos as usize];
        for lemma in &lemmas {
            let entry = index.lemmas.entry(lookup_key(lemma)).or_default();
            if entry.last() != Some(&sense_id) {
                entry.push(sense_id);
            }
        }
        self.senses.push(lemmas);
    }

    /// Base forms of `word` that are `pos` lemmas.
    ///
    /// An exception entry wins over the suffix rules. Otherwise the word and
    /// its one-step reductions are tried together; if none is a lemma the
    /// rules are applied again until a lemma turns up or nothing is left.
    pub fn morphy(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        let form = lookup_key(word);
        let index = &self.indexes[pos as usize];

        if let Some(bases) = index.exceptions.get(&form) {
            return index.known_forms(std::iter::once(form.clone()).chain(bases.iter().cloned()));
        }

        let mut forms = pos.detach_suffixes(std::slice::from_ref(&form));
        let known = index.known_forms(std::iter::once(form).chain(forms.iter().cloned()));
        if !known.is_empty() {
            return known;
        }

        while !forms.is_empty() {
            forms = pos.detach_suffixes(&forms);
            let known = index.known_forms(forms.iter().cloned());
            if !known.is_empty() {
                return known;
            }
        }

        Vec::new()
    }

    /// Number of synsets loaded.
    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    /// Number of (lemma, part of speech) pairs.
    pub fn lemma_count(&self) -> usize {
        self.indexes.iter().map(|index| index.lemmas.len()).sum()
    }

    /// Check if no synsets are loaded.
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl SynonymResolver for WordNet {
    fn lookup(&self, word: &str) -> Result<Vec<String>> {
        let mut seen = AHashSet::new();
        let mut lemmas = Vec::new();

        for pos in PartOfSpeech::ALL {
            let index = &self.indexes[pos as usize];
            for form in self.morphy(word, pos) {
                for &id in index.lemmas.get(&form).into_iter().flatten() {
                    if seen.insert(id) {
                        lemmas.extend(self.senses[id].iter().cloned());
                    }
                }
            }
        }

        Ok(lemmas)
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

fn lookup_key(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

/// Extract the lemma names from one synset line.
fn parse_data_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err("truncated synset header".to_string());
    }

    if !fields[0].chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid synset offset '{}'", fields[0]));
    }

    let word_count = usize::from_str_radix(fields[3], 16)
        .map_err(|_| format!("invalid word count '{}'", fields[3]))?;

    let words_end = word_count
        .checked_mul(2)
        .and_then(|w| w.checked_add(4))
        .ok_or_else(|| format!("invalid word count '{}'", fields[3]))?;
    if fields.len() < words_end {
        return Err(format!(
            "expected {word_count} words but the line ends early"
        ));
    }

    Ok(fields[4..words_end]
        .chunks(2)
        .map(|pair| strip_adjective_marker(pair[0]).to_string())
        .collect())
}

/// Remove a syntactic marker such as `(a)`, `(p)` or `(ip)` from an adjective.
fn strip_adjective_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if idx > 0 && word.ends_with(')') => &word[..idx],
        _ => word,
    }
}
