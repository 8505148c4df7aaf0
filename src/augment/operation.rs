//! The four EDA operations as a value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexaugError, Result};

/// One of the four Easy Data Augmentation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Replace non-stop words with synonyms.
    SynonymReplacement,
    /// Insert synonyms of random words at random positions.
    RandomInsertion,
    /// Drop each word with a fixed probability.
    RandomDeletion,
    /// Swap random pairs of words.
    RandomSwap,
}

impl Operation {
    /// All operations, in canonical order.
    pub const ALL: [Operation; 4] = [
        Operation::SynonymReplacement,
        Operation::RandomInsertion,
        Operation::RandomDeletion,
        Operation::RandomSwap,
    ];

    /// Get the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SynonymReplacement => "synonym_replacement",
            Operation::RandomInsertion => "random_insertion",
            Operation::RandomDeletion => "random_deletion",
            Operation::RandomSwap => "random_swap",
        }
    }

    /// Whether this operation looks words up in the synonym resolver.
    pub fn uses_synonyms(&self) -> bool {
        matches!(
            self,
            Operation::SynonymReplacement | Operation::RandomInsertion
        )
    }

    /// Parse an operation from its name or short alias (`sr`, `ri`, `rd`, `rs`).
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "synonym_replacement" | "sr" => Ok(Operation::SynonymReplacement),
            "random_insertion" | "ri" => Ok(Operation::RandomInsertion),
            "random_deletion" | "rd" => Ok(Operation::RandomDeletion),
            "random_swap" | "rs" => Ok(Operation::RandomSwap),
            _ => Err(LexaugError::InvalidOperation(format!(
                "Unknown augmentation operation: {s}"
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LexaugError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::parse_str(s)
    }
}
