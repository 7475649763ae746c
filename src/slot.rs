//! Slot extraction from raw query text.
//!
//! Slots are read from the *original* query, before normalization: the
//! analysis pipeline would split `#12345` into `#` and `12345` and then drop
//! the hash symbol.
//!
//! # Examples
//!
//! ```
//! use lexreply::slot::extract_order_number;
//!
//! assert_eq!(extract_order_number("Where is my order #12345?"), Some("#12345".to_string()));
//! assert_eq!(extract_order_number("Can I cancel my order?"), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LexreplyError, Result};

/// Default order number pattern: a hash symbol followed by digits.
pub const DEFAULT_ORDER_NUMBER_PATTERN: &str = r"#\d+";

static ORDER_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_ORDER_NUMBER_PATTERN).expect("order number pattern is valid")
});

/// Extract the first order number (`#` followed by digits) from `text`.
///
/// The match is returned verbatim, hash symbol included. Later matches are
/// ignored.
pub fn extract_order_number(text: &str) -> Option<String> {
    ORDER_NUMBER_REGEX
        .find(text)
        .map(|mat| mat.as_str().to_string())
}

/// A pattern-based extractor for a single slot.
#[derive(Debug, Clone)]
pub struct SlotExtractor {
    pattern: Regex,
}

impl SlotExtractor {
    /// Create an extractor using the default order number pattern.
    pub fn order_number() -> Self {
        SlotExtractor {
            pattern: ORDER_NUMBER_REGEX.clone(),
        }
    }

    /// Create an extractor from a custom regular expression.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexreplyError::config(format!("Invalid slot pattern '{pattern}': {e}")))?;

        Ok(SlotExtractor { pattern: regex })
    }

    /// Get the pattern used by this extractor.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the first match from `text`, verbatim.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|mat| mat.as_str().to_string())
    }
}

impl Default for SlotExtractor {
    fn default() -> Self {
        Self::order_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_order_number() {
        assert_eq!(
            extract_order_number("Where is my order #12345?"),
            Some("#12345".to_string())
        );
        assert_eq!(extract_order_number("Where is my order #99?"), Some("#99".to_string()));
        assert_eq!(extract_order_number("Can I cancel my order?"), None);
    }

    #[test]
    fn test_only_first_match_is_used() {
        assert_eq!(
            extract_order_number("Orders #12 and #34 are late"),
            Some("#12".to_string())
        );
    }

    #[test]
    fn test_hash_without_digits_does_not_match() {
        assert_eq!(extract_order_number("order # please"), None);
        assert_eq!(extract_order_number("order #abc"), None);
        assert_eq!(extract_order_number("order 12345"), None);
    }

    #[test]
    fn test_match_inside_word() {
        assert_eq!(extract_order_number("ref:#007x"), Some("#007".to_string()));
    }

    #[test]
    fn test_custom_pattern() {
        let extractor = SlotExtractor::with_pattern(r"ORD-\d{4}").unwrap();

        assert_eq!(extractor.extract("status of ORD-1234?"), Some("ORD-1234".to_string()));
        assert_eq!(extractor.extract("status of #1234?"), None);
        assert_eq!(extractor.pattern(), r"ORD-\d{4}");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = SlotExtractor::with_pattern("#(");
        assert!(matches!(result, Err(LexreplyError::Config(_))));
    }

    #[test]
    fn test_default_extractor_matches_free_function() {
        let extractor = SlotExtractor::default();
        let text = "Where is my order #4711?";

        assert_eq!(extractor.extract(text), extract_order_number(text));
    }
}
