//! Easy Data Augmentation (EDA) for single sentences.
//!
//! The [`Augmenter`] owns a stop-word set, a synonym resolver and a seeded
//! random source, and exposes the four EDA operations plus helpers to chain
//! them. [`AugmentConfig`] carries the default parameters and retry budgets.

pub mod augmenter;
pub mod config;
pub mod operation;

pub use augmenter::Augmenter;
pub use config::AugmentConfig;
pub use operation::Operation;
