//! Token filter implementations for token transformation.
//!
//! Filters run after the tokenizer, in the order they were added to a
//! [`PipelineAnalyzer`](crate::analysis::analyzer::PipelineAnalyzer). Each one
//! maps, drops or marks tokens and hands the stream on.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod lemma;
pub mod lowercase;
pub mod stop;

pub use alphanumeric::AlphanumericFilter;
pub use lemma::{IdentityLemmatizer, LemmaFilter, Lemmatizer, WordNetLemmatizer};
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
