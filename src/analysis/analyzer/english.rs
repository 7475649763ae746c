use std::collections::HashSet;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::lemma::{LemmaFilter, Lemmatizer};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::treebank::TreebankTokenizer;
use crate::error::Result;

/// English query analyzer.
///
/// Treebank tokenization, lowercasing, alphanumeric filtering, English stop
/// word removal and noun lemmatization, in that order.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Self {
        Self::with_components(StopFilter::new(), LemmaFilter::new())
    }

    /// Build the analyzer with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::with_components(StopFilter::with_stop_words(stop_words), LemmaFilter::new())
    }

    /// Build the analyzer with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self::with_components(StopFilter::new(), LemmaFilter::with_lemmatizer(lemmatizer))
    }

    /// Build the analyzer from explicit stop and lemma stages.
    pub fn with_components(stop: StopFilter, lemma: LemmaFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(TreebankTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(stop))
            .add_filter(Arc::new(lemma))
            .with_name("english");

        Self { inner: analyzer }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
