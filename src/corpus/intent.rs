//! Intent records.

use serde::{Deserialize, Serialize};

use crate::error::{LexreplyError, Result};
use crate::template::ResponseTemplate;

/// One supported intent: a label, an example query and a response template.
///
/// The serialized field names are `intent`, `example_query` and `response`;
/// `intent_label` and `response_template` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Human-readable intent name.
    #[serde(rename = "intent", alias = "intent_label")]
    pub label: String,
    /// Example query the intent is matched against.
    pub example_query: String,
    /// Response template, possibly containing one placeholder.
    #[serde(rename = "response", alias = "response_template")]
    pub response: String,
}

impl IntentRecord {
    /// Create a new intent record.
    pub fn new<L, Q, R>(label: L, example_query: Q, response: R) -> Self
    where
        L: Into<String>,
        Q: Into<String>,
        R: Into<String>,
    {
        IntentRecord {
            label: label.into(),
            example_query: example_query.into(),
            response: response.into(),
        }
    }

    /// Check the record and parse its response template.
    ///
    /// The label must not be blank, the template must be well formed and
    /// use at most one distinct placeholder name.
    pub fn validate(&self) -> Result<ResponseTemplate> {
        if self.label.trim().is_empty() {
            return Err(LexreplyError::corpus(format!(
                "intent with example query {:?} has an empty label",
                self.example_query
            )));
        }

        let template = ResponseTemplate::parse(&self.response)?;

        let mut names: Vec<&str> = template.placeholders().collect();
        names.sort_unstable();
        names.dedup();
        if names.len() > 1 {
            return Err(LexreplyError::template(format!(
                "intent '{}' uses more than one placeholder: {}",
                self.label,
                names.join(", ")
            )));
        }

        Ok(template)
    }
}
