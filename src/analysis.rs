//! Text analysis for lexreply.
//!
//! Raw query text is turned into canonical terms by an analysis pipeline:
//! a tokenizer splits the text, then token filters lowercase, drop
//! non-alphanumeric tokens and stop words, and lemmatize what is left.
//! [`normalizer::TextNormalizer`] wraps that pipeline behind a
//! `normalize(text) -> Vec<String>` call.

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
