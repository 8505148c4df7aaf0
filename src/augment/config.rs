//! Configuration for the augmenter.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::operation::Operation;
use crate::error::{LexaugError, Result};

/// Default number of random tokens tried when looking for a word to insert.
pub const DEFAULT_INSERTION_ATTEMPTS: usize = 10;

/// Default number of redraws when looking for a second, distinct swap index.
pub const DEFAULT_SWAP_ATTEMPTS: usize = 3;

/// Parameters used by [`Augmenter::apply`](super::Augmenter::apply) and
/// friends, plus the retry budgets every operation honors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Language of the stop-word list loaded at construction.
    pub language: String,
    /// Maximum distinct words changed by synonym replacement.
    pub max_replacements: usize,
    /// Number of random insertions.
    pub insertions: usize,
    /// Probability (0.0-1.0) that random deletion drops a token.
    pub deletion_probability: f64,
    /// Number of random swaps.
    pub swaps: usize,
    /// Random tokens tried per insertion before the insertion is skipped.
    pub insertion_attempts: usize,
    /// Redraws of the second swap index before the swap is abandoned.
    pub swap_attempts: usize,
    /// Operations cycled through by `generate`.
    pub operations: Vec<Operation>,
    /// Seed for the random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            max_replacements: 2,
            insertions: 2,
            deletion_probability: 0.1,
            swaps: 2,
            insertion_attempts: DEFAULT_INSERTION_ATTEMPTS,
            swap_attempts: DEFAULT_SWAP_ATTEMPTS,
            operations: Operation::ALL.to_vec(),
            seed: None,
        }
    }
}

impl AugmentConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexaugError::invalid_config(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: AugmentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no operation can run with.
    pub fn validate(&self) -> Result<()> {
        validate_probability(self.deletion_probability)?;
        if self.operations.is_empty() {
            return Err(LexaugError::invalid_config(
                "at least one operation is required",
            ));
        }
        Ok(())
    }

    /// Builder-style setter for the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Reject probabilities outside `[0, 1]` (and NaN).
pub(crate) fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(LexaugError::invalid_argument(format!(
            "deletion probability must be within [0, 1], got {p}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AugmentConfig::default();
        assert_eq!(config.language, "english");
        assert_eq!(config.max_replacements, 2);
        assert_eq!(config.insertions, 2);
        assert_eq!(config.swaps, 2);
        assert_eq!(config.deletion_probability, 0.1);
        assert_eq!(config.insertion_attempts, 10);
        assert_eq!(config.swap_attempts, 3);
        assert_eq!(config.operations.len(), 4);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AugmentConfig =
            serde_json::from_str(r#"{"swaps": 5, "seed": 7, "operations": ["random_swap"]}"#)
                .unwrap();
        assert_eq!(config.swaps, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.operations, vec![Operation::RandomSwap]);
        assert_eq!(config.insertions, 2);
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        assert!(validate_probability(-0.1).is_err());
        assert!(validate_probability(1.5).is_err());
        assert!(validate_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_empty_operations() {
        let config = AugmentConfig {
            operations: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("augment.json");
        fs::write(&path, r#"{"max_replacements": 4, "deletion_probability": 0.3}"#).unwrap();

        let config = AugmentConfig::from_file(&path).unwrap();
        assert_eq!(config.max_replacements, 4);
        assert_eq!(config.deletion_probability, 0.3);

        fs::write(&path, r#"{"deletion_probability": 2.0}"#).unwrap();
        assert!(AugmentConfig::from_file(&path).is_err());
    }
}
