//! Vector-space indexing of the intent corpus.
//!
//! The index is built once from the normalized example queries and is
//! read-only afterwards: queries are vectorized against the existing
//! vocabulary and never extend it.

pub mod tfidf;
pub mod vocabulary;

pub use self::tfidf::TfIdfIndex;
pub use self::vocabulary::Vocabulary;
