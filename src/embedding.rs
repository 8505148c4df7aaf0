//! Nearest-neighbor lookup over pre-trained word embeddings.
//!
//! [`WordVectors`] loads a plain-text embedding table (GloVe layout: one
//! `word v1 v2 ... vD` line per word) and ranks every word by its distance to
//! a query word.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//!
//! use lexaug::embedding::WordVectors;
//!
//! let table = "king 0.9 0.1\nqueen 0.8 0.2\napple 0.0 1.0\n";
//! let vectors = WordVectors::from_reader(Cursor::new(table)).unwrap();
//!
//! let nearest = vectors.nearest("king", 2).unwrap();
//! assert_eq!(nearest[0].word, "king");
//! assert_eq!(nearest[1].word, "queen");
//! ```

pub mod distance;
pub mod word_vectors;

pub use distance::DistanceMetric;
pub use word_vectors::{Neighbor, WordVectors};
