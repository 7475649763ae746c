//! Configuration for the response engine.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::error::{LexreplyError, Result};
use crate::slot::{DEFAULT_ORDER_NUMBER_PATTERN, SlotExtractor};
use crate::template::ResponseRenderer;

/// Default placeholder name filled with the order number.
pub const DEFAULT_PLACEHOLDER: &str = "order_no";

/// Default value rendered when the query carries no order number.
pub const DEFAULT_MISSING_SLOT_VALUE: &str = "N/A";

/// Settings for building a [`Responder`](crate::responder::Responder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Placeholder name the extracted order number fills.
    pub placeholder: String,
    /// Value substituted when no order number is found.
    pub missing_slot_value: String,
    /// Regular expression locating the order number in the raw query.
    pub order_number_pattern: String,
    /// Replacement stop word list. `None` keeps the standard English list.
    pub stop_words: Option<Vec<String>>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        ResponderConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            missing_slot_value: DEFAULT_MISSING_SLOT_VALUE.to_string(),
            order_number_pattern: DEFAULT_ORDER_NUMBER_PATTERN.to_string(),
            stop_words: None,
        }
    }
}

impl ResponderConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: ResponderConfig = serde_json::from_str(&content).map_err(|e| {
            LexreplyError::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(LexreplyError::config("placeholder must not be empty"));
        }
        self.slot_extractor()?;
        Ok(())
    }

    /// Build the text normalizer described by this configuration.
    pub fn normalizer(&self) -> TextNormalizer {
        let analyzer = match &self.stop_words {
            Some(words) => {
                let set: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
                EnglishAnalyzer::with_stop_words(set)
            }
            None => EnglishAnalyzer::new(),
        };
        TextNormalizer::new(std::sync::Arc::new(analyzer))
    }

    /// Build the order number extractor.
    pub fn slot_extractor(&self) -> Result<SlotExtractor> {
        SlotExtractor::with_pattern(&self.order_number_pattern)
    }

    /// Build the response renderer.
    pub fn renderer(&self) -> ResponseRenderer {
        ResponseRenderer::new(self.placeholder.as_str(), self.missing_slot_value.as_str())
    }
}
