//! # lexaug
//!
//! Easy Data Augmentation (EDA) for short English sentences, plus a small
//! nearest-word utility over pre-trained word embeddings.
//!
//! ## Features
//!
//! - Synonym replacement, random insertion, random deletion and random swap
//! - Pluggable synonym resolvers (JSON sense dictionaries, WordNet data files)
//! - Pluggable stop-word providers
//! - Seedable, reproducible augmentation
//! - Euclidean, cosine and Manhattan nearest-word lookup

pub mod analysis;
pub mod augment;
pub mod cli;
pub mod embedding;
pub mod error;

pub mod prelude {
    pub use crate::analysis::stop::{
        BuiltinStopWords, DirectoryStopWords, StopWordProvider, StopWords,
    };
    pub use crate::analysis::synonym::{SynonymDictionary, SynonymResolver, WordNet};
    pub use crate::augment::{AugmentConfig, Augmenter, Operation};
    pub use crate::embedding::{DistanceMetric, Neighbor, WordVectors};
    pub use crate::error::{LexaugError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
