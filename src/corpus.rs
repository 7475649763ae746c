//! The intent corpus.
//!
//! A [`Corpus`] is an ordered, non-empty, read-only list of
//! [`IntentRecord`]s. Order matters: it is the tie-break when two intents
//! score the same.
//!
//! # Examples
//!
//! ```
//! use lexreply::corpus::Corpus;
//!
//! let corpus = Corpus::builtin().unwrap();
//! assert_eq!(corpus.len(), 10);
//! assert_eq!(corpus.get(0).unwrap().label, "Order Status");
//! ```

pub mod builtin;
pub mod intent;
pub mod loader;

use std::path::Path;

use log::info;

use crate::error::{LexreplyError, Result};
use crate::template::ResponseTemplate;

pub use intent::IntentRecord;
pub use loader::CorpusFormat;

/// An ordered set of intents with their parsed response templates.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<IntentRecord>,
    templates: Vec<ResponseTemplate>,
}

impl Corpus {
    /// Create a corpus from records, validating each one.
    pub fn new(records: Vec<IntentRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(LexreplyError::corpus("corpus has no intent records"));
        }

        let templates = records
            .iter()
            .map(IntentRecord::validate)
            .collect::<Result<Vec<_>>>()?;

        Ok(Corpus { records, templates })
    }

    /// The built-in customer-support corpus.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::builtin_records())
    }

    /// Load and validate a corpus file. See [`loader`] for the formats.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let corpus = Self::new(loader::read_records(path)?)?;
        info!("Loaded {} intents from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a corpus holds at least one intent.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by position.
    pub fn get(&self, index: usize) -> Option<&IntentRecord> {
        self.records.get(index)
    }

    /// Get the parsed response template of a record.
    pub fn template(&self, index: usize) -> Option<&ResponseTemplate> {
        self.templates.get(index)
    }

    /// All records in corpus order.
    pub fn records(&self) -> &[IntentRecord] {
        &self.records
    }

    /// Iterate over the example queries in corpus order.
    pub fn example_queries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.example_query.as_str())
    }

    /// Iterate over the intent labels in corpus order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;

    use super::*;

    #[test]
    fn test_builtin_corpus() {
        let corpus = Corpus::builtin().unwrap();

        assert_eq!(corpus.len(), 10);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.records().len(), corpus.len());
        assert_eq!(
            corpus.template(0).unwrap().source(),
            "Your order {order_no} is out for delivery."
        );
        assert_eq!(corpus.labels().nth(4), Some("Cancel Order"));
        assert_eq!(corpus.example_queries().nth(4), Some("Can I cancel my order?"));
    }

    #[test]
    fn test_templates_stay_aligned_with_records() {
        let corpus = Corpus::builtin().unwrap();

        for (index, record) in corpus.records().iter().enumerate() {
            assert_eq!(corpus.template(index).unwrap().source(), record.response);
        }
        assert!(corpus.template(corpus.len()).is_none());
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        assert!(matches!(Corpus::new(Vec::new()), Err(LexreplyError::Corpus(_))));
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let records = vec![
            IntentRecord::new("Good", "q", "fine"),
            IntentRecord::new("Bad", "q", "broken {order_no"),
        ];

        assert!(matches!(
            Corpus::new(records),
            Err(LexreplyError::TemplateFormat(_))
        ));
    }

    #[test]
    fn test_from_jsonl_file() {
        let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(
            file,
            r#"{{"intent": "Refund", "example_query": "Where is my refund?", "response": "Refunds take 5 days."}}"#
        )
        .unwrap();
        writeln!(
            file,
            r#"{{"intent": "Track", "example_query": "Track order", "response": "Order {{order_no}} is on its way."}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let corpus = Corpus::from_file(file.path()).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.labels().collect::<Vec<_>>(), vec!["Refund", "Track"]);
        assert!(corpus.template(1).unwrap().has_placeholders());
    }

    #[test]
    fn test_from_empty_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "[]").unwrap();
        file.flush().unwrap();

        assert!(matches!(
            Corpus::from_file(file.path()),
            Err(LexreplyError::Corpus(_))
        ));
    }
}
