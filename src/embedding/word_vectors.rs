//! Word embedding table with nearest-word lookup.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::distance::DistanceMetric;
use crate::error::{LexaugError, Result};

/// A word and its distance to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub word: String,
    pub distance: f32,
}

/// An immutable table of word vectors.
#[derive(Debug, Clone)]
pub struct WordVectors {
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    index: AHashMap<String, usize>,
    dimension: usize,
    metric: DistanceMetric,
}

impl WordVectors {
    /// Load a table from a text file with one `word v1 ... vD` line per word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LexaugError::resource(format!(
                "Failed to open embedding file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let vectors = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} vectors of dimension {} from {}",
            vectors.len(),
            vectors.dimension(),
            path.display()
        );
        Ok(vectors)
    }

    /// Read a table from any buffered reader.
    ///
    /// Blank lines are skipped. The first entry fixes the dimension; later
    /// entries with a different component count are rejected. A word listed
    /// twice keeps its last vector.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        let mut vectors: Vec<Vec<f32>> = Vec::new();
        let mut index = AHashMap::new();
        let mut dimension = 0;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };

            let vector = fields
                .map(|value| {
                    value.parse::<f32>().map_err(|_| {
                        LexaugError::parse(format!(
                            "line {}: invalid component '{}' for '{}'",
                            line_num + 1,
                            value,
                            word
                        ))
                    })
                })
                .collect::<Result<Vec<f32>>>()?;

            if vector.is_empty() {
                return Err(LexaugError::parse(format!(
                    "line {}: '{}' has no components",
                    line_num + 1,
                    word
                )));
            }

            if dimension == 0 {
                dimension = vector.len();
            } else if vector.len() != dimension {
                return Err(LexaugError::parse(format!(
                    "line {}: expected {} components for '{}', found {}",
                    line_num + 1,
                    dimension,
                    word,
                    vector.len()
                )));
            }

            match index.get(word) {
                Some(&existing) => {
                    warn!("Duplicate embedding for '{word}' on line {}", line_num + 1);
                    vectors[existing] = vector;
                }
                None => {
                    index.insert(word.to_string(), words.len());
                    words.push(word.to_string());
                    vectors.push(vector);
                }
            }
        }

        if words.is_empty() {
            return Err(LexaugError::embedding("embedding table is empty"));
        }

        Ok(WordVectors {
            words,
            vectors,
            index,
            dimension,
            metric: DistanceMetric::default(),
        })
    }

    /// Use a different distance metric for neighbor ranking.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The metric used for neighbor ranking.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Number of components per vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the table has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if `word` has a vector.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the vector for `word`.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&i| self.vectors[i].as_slice())
    }

    /// The `k` words closest to `word`, nearest first.
    ///
    /// The query word itself is part of the ranking (at distance zero).
    /// Ties keep table order.
    pub fn nearest(&self, word: &str, k: usize) -> Result<Vec<Neighbor>> {
        let query = self
            .get(word)
            .ok_or_else(|| LexaugError::not_found(format!("'{word}' is out of vocabulary")))?;
        self.nearest_to_vector(query, k)
    }

    /// The `k` words closest to an arbitrary vector, nearest first.
    pub fn nearest_to_vector(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        let distances = self.metric.batch_distance_parallel(query, &self.vectors)?;

        let mut ranked: Vec<usize> = (0..self.words.len()).collect();
        ranked.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

        Ok(ranked
            .into_iter()
            .take(k)
            .map(|i| Neighbor {
                word: self.words[i].clone(),
                distance: distances[i],
            })
            .collect())
    }
}
