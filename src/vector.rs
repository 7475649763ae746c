//! Sparse term-weight vectors and similarity search over them.
//!
//! # Module Structure
//!
//! - `sparse`: the [`SparseVector`] type (sorted index/weight pairs)
//! - `similarity`: cosine similarity and best-match retrieval

pub mod similarity;
pub mod sparse;

pub use self::similarity::{ScoredMatch, SimilarityRetriever};
pub use self::sparse::SparseVector;
