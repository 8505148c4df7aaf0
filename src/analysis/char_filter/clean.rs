//! Sentence cleaning ahead of augmentation.
//!
//! Removes `?`, `|`, `$`, `.` and `!`, lowercases, and then turns each of
//! `.`, `,`, `)`, `(`, `\` and `/` into a single space. Whitespace is not
//! collapsed here; the whitespace tokenizer does that.

use super::{CharFilter, PatternReplaceCharFilter};

use crate::error::Result;

const REMOVED_CHARS: &str = r"[?|$.!]";
const SPACED_CHARS: &str = r"[.,)(\\/]";

/// Char filter implementing the augmentation `clean` helper.
///
/// # Examples
///
/// ```
/// use lexaug::analysis::char_filter::{CharFilter, CleanCharFilter};
///
/// let filter = CleanCharFilter::new().unwrap();
/// assert_eq!(filter.filter("Hello, World!"), "hello  world");
/// ```
#[derive(Clone, Debug)]
pub struct CleanCharFilter {
    remove: PatternReplaceCharFilter,
    space: PatternReplaceCharFilter,
}

impl CleanCharFilter {
    /// Create a new clean filter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            remove: PatternReplaceCharFilter::new(REMOVED_CHARS, "")?,
            space: PatternReplaceCharFilter::new(SPACED_CHARS, " ")?,
        })
    }
}

impl CharFilter for CleanCharFilter {
    fn filter(&self, input: &str) -> String {
        let stripped = self.remove.filter(input).to_lowercase();
        self.space.filter(&stripped)
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}
