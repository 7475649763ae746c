//! Cosine similarity and nearest-neighbour retrieval.
//!
//! Document and query vectors are L2-normalized at construction time, so
//! the cosine of the angle between them is just their dot product. With
//! non-negative TF-IDF weights every score lies in `[0, 1]`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexreplyError, Result};
use crate::vector::sparse::SparseVector;

/// Cosine similarity between two vectors of any length.
///
/// Returns `0.0` when either vector is zero. For unit vectors this equals
/// `a.dot(b)`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> Result<f64> {
    let dot = a.dot(b)?;
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / norms)
    }
}

/// The best-scoring document for a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// Position of the document in corpus order.
    pub index: usize,
    /// Cosine similarity between the query and the document.
    pub score: f64,
}

/// Finds the document vector closest to a query vector.
///
/// Retrieval always returns the arg-max. There is no minimum score: a
/// query sharing no terms with any document still matches the first one
/// with a score of zero. Ties go to the lowest document index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRetriever;

impl SimilarityRetriever {
    /// Create a new retriever.
    pub fn new() -> Self {
        SimilarityRetriever
    }

    /// Score the query against every document, in document order.
    ///
    /// Both sides must already be L2-normalized.
    pub fn score_all(&self, query: &SparseVector, documents: &[SparseVector]) -> Result<Vec<f64>> {
        documents.iter().map(|doc| query.dot(doc)).collect()
    }

    /// Find the best match for `query` among `documents`.
    ///
    /// Fails only if `documents` is empty or dimensions disagree, neither
    /// of which can happen for vectors produced by one
    /// [`TfIdfIndex`](crate::index::TfIdfIndex).
    pub fn best_match(&self, query: &SparseVector, documents: &[SparseVector]) -> Result<ScoredMatch> {
        let scores = self.score_all(query, documents)?;
        let best = Self::arg_max(&scores)
            .ok_or_else(|| LexreplyError::index("Cannot match against an empty document set"))?;

        debug!(
            "best match: document {} with score {:.4} (of {} documents)",
            best.index,
            best.score,
            documents.len()
        );

        Ok(best)
    }

    /// Arg-max with first-index tie-breaking.
    fn arg_max(scores: &[f64]) -> Option<ScoredMatch> {
        let mut best: Option<ScoredMatch> = None;
        for (index, &score) in scores.iter().enumerate() {
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(ScoredMatch { index, score }),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(dimension: usize, pairs: Vec<(usize, f64)>) -> SparseVector {
        let mut vector = SparseVector::from_pairs(dimension, pairs).unwrap();
        vector.normalize();
        vector
    }

    #[test]
    fn test_cosine_similarity() {
        let a = SparseVector::from_pairs(3, vec![(0, 2.0)]).unwrap();
        let b = SparseVector::from_pairs(3, vec![(0, 1.0), (1, 1.0)]).unwrap();

        let similarity = cosine_similarity(&a, &b).unwrap();
        assert!((similarity - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(cosine_similarity(&a, &SparseVector::zeros(3)).unwrap(), 0.0);
    }

    #[test]
    fn test_best_match_picks_highest() {
        let documents = vec![
            unit(3, vec![(0, 1.0)]),
            unit(3, vec![(1, 1.0), (2, 1.0)]),
            unit(3, vec![(2, 1.0)]),
        ];
        let query = unit(3, vec![(2, 1.0)]);

        let best = SimilarityRetriever::new().best_match(&query, &documents).unwrap();

        assert_eq!(best.index, 2);
        assert!((best.score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let documents = vec![
            unit(3, vec![(0, 1.0)]),
            unit(3, vec![(1, 1.0), (2, 1.0)]),
            unit(3, vec![(1, 1.0), (2, 1.0)]),
        ];
        let query = unit(3, vec![(1, 1.0)]);

        let best = SimilarityRetriever::new().best_match(&query, &documents).unwrap();

        assert_eq!(best.index, 1);
    }

    #[test]
    fn test_zero_query_returns_first_document() {
        let documents = vec![unit(2, vec![(0, 1.0)]), unit(2, vec![(1, 1.0)])];

        let best = SimilarityRetriever::new()
            .best_match(&SparseVector::zeros(2), &documents)
            .unwrap();

        assert_eq!(best.index, 0);
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_all_zero_documents_return_first_document() {
        let documents = vec![SparseVector::zeros(2), SparseVector::zeros(2)];
        let query = unit(2, vec![(0, 1.0)]);

        let best = SimilarityRetriever::new().best_match(&query, &documents).unwrap();

        assert_eq!(best, ScoredMatch { index: 0, score: 0.0 });
    }

    #[test]
    fn test_empty_document_set_is_an_error() {
        let result = SimilarityRetriever::new().best_match(&SparseVector::zeros(2), &[]);
        assert!(result.is_err());
    }
}
