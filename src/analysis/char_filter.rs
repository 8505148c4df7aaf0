//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw sentence string before it reaches a
//! tokenizer.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`clean::CleanCharFilter`] - Punctuation stripping and lowercasing for
//!   augmentation input
//!
//! # Examples
//!
//! ```
//! use lexaug::analysis::char_filter::CharFilter;
//! use lexaug::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "#").unwrap();
//! assert_eq!(filter.filter("route 66"), "route #");
//! ```

pub mod clean;
pub mod pattern_replace;

pub use clean::CleanCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
