//! The response engine.
//!
//! A [`Responder`] owns a corpus and the TF-IDF index built from its
//! example queries. Answering a query runs two independent paths over the
//! raw text: normalization, vectorization and retrieval pick the intent,
//! while slot extraction pulls out the order number. The winning intent's
//! template is then rendered with that order number.
//!
//! # Examples
//!
//! ```
//! use lexreply::responder::Responder;
//!
//! let responder = Responder::builtin().unwrap();
//!
//! assert_eq!(
//!     responder.get_response("Where is my order #99?").unwrap(),
//!     "Your order #99 is out for delivery."
//! );
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ResponderConfig;
use crate::corpus::{Corpus, IntentRecord};
use crate::error::{LexreplyError, Result};
use crate::index::TfIdfIndex;
use crate::slot::SlotExtractor;
use crate::template::ResponseRenderer;
use crate::vector::{ScoredMatch, SimilarityRetriever};

/// Score of one intent for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    /// Intent label.
    pub intent: String,
    /// Cosine similarity with the query.
    pub score: f64,
}

/// Details of how a query was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    /// The raw query.
    pub query: String,
    /// Normalized query terms, in order.
    pub terms: Vec<String>,
    /// Corpus position of the winning intent.
    pub intent_index: usize,
    /// Label of the winning intent.
    pub intent: String,
    /// Similarity of the winning intent.
    pub score: f64,
    /// Order number found in the raw query, if any.
    pub order_number: Option<String>,
    /// The rendered response.
    pub response: String,
    /// Every intent's score in corpus order.
    pub scores: Vec<IntentScore>,
}

/// Matches free-text queries to intents and renders responses.
///
/// Built once and read-only afterwards, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Responder {
    corpus: Corpus,
    index: TfIdfIndex,
    retriever: SimilarityRetriever,
    extractor: SlotExtractor,
    renderer: ResponseRenderer,
}

impl Responder {
    /// Build a responder over `corpus`.
    pub fn build(corpus: Corpus, config: &ResponderConfig) -> Result<Self> {
        config.validate()?;

        let index = TfIdfIndex::build(config.normalizer(), corpus.example_queries())?;

        Ok(Responder {
            corpus,
            index,
            retriever: SimilarityRetriever::new(),
            extractor: config.slot_extractor()?,
            renderer: config.renderer(),
        })
    }

    /// Build a responder with the default configuration.
    pub fn new(corpus: Corpus) -> Result<Self> {
        Self::build(corpus, &ResponderConfig::default())
    }

    /// Build a responder over the built-in corpus.
    pub fn builtin() -> Result<Self> {
        Self::new(Corpus::builtin()?)
    }

    /// Answer a query.
    ///
    /// Every query matches some intent; a query sharing no terms with the
    /// corpus gets the first intent. The only error is a template using a
    /// placeholder other than the configured one.
    pub fn get_response(&self, query: &str) -> Result<String> {
        let best = self.best_match(query)?;
        let order_number = self.extractor.extract(query);
        self.render(best.index, order_number.as_deref())
    }

    /// Answer a query and report how the answer was chosen.
    pub fn explain(&self, query: &str) -> Result<MatchExplanation> {
        let terms = self.index.normalizer().normalize(query)?;
        let query_vector = self.index.vectorize(&terms);
        let documents = self.index.document_vectors();

        let scores = self.retriever.score_all(&query_vector, documents)?;
        let best = self.retriever.best_match(&query_vector, documents)?;
        let order_number = self.extractor.extract(query);
        let response = self.render(best.index, order_number.as_deref())?;

        Ok(MatchExplanation {
            query: query.to_string(),
            terms,
            intent_index: best.index,
            intent: self.intent(best.index)?.label.clone(),
            score: best.score,
            order_number,
            response,
            scores: self
                .corpus
                .labels()
                .zip(scores)
                .map(|(intent, score)| IntentScore {
                    intent: intent.to_string(),
                    score,
                })
                .collect(),
        })
    }

    /// Find the best intent for a query.
    pub fn best_match(&self, query: &str) -> Result<ScoredMatch> {
        let query_vector = self.index.vectorize_text(query)?;
        let best = self
            .retriever
            .best_match(&query_vector, self.index.document_vectors())?;

        debug!(
            "query {query:?} matched intent '{}' ({:.4})",
            self.intent(best.index)?.label,
            best.score
        );

        Ok(best)
    }

    fn intent(&self, index: usize) -> Result<&IntentRecord> {
        self.corpus
            .get(index)
            .ok_or_else(|| LexreplyError::index(format!("No intent at position {index}")))
    }

    fn render(&self, index: usize, order_number: Option<&str>) -> Result<String> {
        let template = self
            .corpus
            .template(index)
            .ok_or_else(|| LexreplyError::index(format!("No template at position {index}")))?;
        self.renderer.render(template, order_number)
    }

    /// The intents this responder answers with.
    pub fn intents(&self) -> &[IntentRecord] {
        self.corpus.records()
    }

    /// The corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The TF-IDF index over the corpus.
    pub fn index(&self) -> &TfIdfIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_responder_is_send_sync() {
        assert_send_sync::<Responder>();
    }

    #[test]
    fn test_order_status_with_number() {
        let responder = Responder::builtin().unwrap();

        assert_eq!(
            responder.get_response("Where is my order #12345?").unwrap(),
            "Your order #12345 is out for delivery."
        );
    }

    #[test]
    fn test_order_status_without_number() {
        let responder = Responder::builtin().unwrap();

        assert_eq!(
            responder.get_response("Where is my order?").unwrap(),
            "Your order N/A is out for delivery."
        );
    }

    #[test]
    fn test_unrelated_query_falls_back_to_first_intent() {
        let responder = Responder::builtin().unwrap();

        let explanation = responder.explain("quantum blockchain").unwrap();

        assert_eq!(explanation.intent_index, 0);
        assert_eq!(explanation.score, 0.0);
        assert!(explanation.terms.iter().all(|t| responder.index().vocabulary().get(t).is_none()));
        assert_eq!(explanation.response, "Your order N/A is out for delivery.");
    }

    #[test]
    fn test_explain_reports_all_scores() {
        let responder = Responder::builtin().unwrap();

        let explanation = responder.explain("Can I cancel my order?").unwrap();

        assert_eq!(explanation.intent, "Cancel Order");
        assert_eq!(explanation.intent_index, 4);
        assert_eq!(explanation.terms, vec!["cancel", "order"]);
        assert_eq!(explanation.scores.len(), 10);
        assert!((explanation.score - 1.0).abs() < 1e-9);
        assert_eq!(explanation.scores[4].score, explanation.score);
        assert!(
            explanation
                .scores
                .iter()
                .all(|s| (0.0..=1.0 + 1e-9).contains(&s.score))
        );
    }

    #[test]
    fn test_custom_placeholder_and_missing_value() {
        let corpus = Corpus::new(vec![
            IntentRecord::new("Ticket", "ticket status", "Ticket {ticket} is open."),
            IntentRecord::new("Hours", "opening hours", "We open at 9."),
        ])
        .unwrap();
        let config = ResponderConfig {
            placeholder: "ticket".to_string(),
            missing_slot_value: "unknown".to_string(),
            order_number_pattern: r"T-\d+".to_string(),
            stop_words: None,
        };

        let responder = Responder::build(corpus, &config).unwrap();

        assert_eq!(
            responder.get_response("ticket T-42 status").unwrap(),
            "Ticket T-42 is open."
        );
        assert_eq!(
            responder.get_response("what is the ticket status").unwrap(),
            "Ticket unknown is open."
        );
        assert_eq!(responder.get_response("hours?").unwrap(), "We open at 9.");
    }

    #[test]
    fn test_unknown_placeholder_fails_the_request() {
        let corpus = Corpus::new(vec![IntentRecord::new(
            "Greeting",
            "hello there",
            "Hello {customer}!",
        )])
        .unwrap();
        let responder = Responder::new(corpus).unwrap();

        assert!(matches!(
            responder.get_response("hello"),
            Err(LexreplyError::TemplateFormat(_))
        ));
    }

    #[test]
    fn test_invalid_config_fails_build() {
        let config = ResponderConfig {
            order_number_pattern: "(".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            Responder::build(Corpus::builtin().unwrap(), &config),
            Err(LexreplyError::Config(_))
        ));
    }
}
