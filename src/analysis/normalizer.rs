//! Text normalization: raw text to canonical term sequence.
//!
//! # Examples
//!
//! ```
//! use lexreply::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::english();
//! let terms = normalizer.normalize("My payment failed but money was deducted.").unwrap();
//! assert_eq!(terms, vec!["payment", "failed", "money", "deducted"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Turns raw text into the terms used for indexing and querying.
///
/// Terms keep their original relative order and duplicates are preserved,
/// since downstream term-frequency counting depends on both. Empty or
/// stopword-only input yields an empty vector.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl TextNormalizer {
    /// Create a normalizer backed by the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TextNormalizer { analyzer }
    }

    /// Create a normalizer with the default English pipeline.
    pub fn english() -> Self {
        Self::new(Arc::new(EnglishAnalyzer::new()))
    }

    /// Normalize `text` into a sequence of terms.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the analyzer behind this normalizer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
