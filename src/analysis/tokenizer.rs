//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline. They split raw
//! input text into [`Token`](crate::analysis::token::Token)s which the token
//! filters then transform.
//!
//! # Examples
//!
//! ```
//! use lexreply::analysis::tokenizer::Tokenizer;
//! use lexreply::analysis::tokenizer::treebank::TreebankTokenizer;
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Where is my order #12345?").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Where", "is", "my", "order", "#", "12345", "?"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers holding a tokenizer can be
/// shared between threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod treebank;

pub use treebank::TreebankTokenizer;
