//! TF-IDF index over a fixed document collection.
//!
//! Each document is weighted with
//!
//! ```text
//! weight(t, d) = tf(t, d) × idf(t)
//! idf(t)       = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! where `tf` is the raw term count, `N` the number of documents and `df`
//! the number of documents containing the term. Vectors are L2-normalized;
//! a document with no terms stays a zero vector.
//!
//! # Examples
//!
//! ```
//! use lexreply::analysis::normalizer::TextNormalizer;
//! use lexreply::index::TfIdfIndex;
//!
//! let index = TfIdfIndex::build(
//!     TextNormalizer::english(),
//!     ["Where is my order #12345?", "Can I cancel my order?"],
//! ).unwrap();
//!
//! assert_eq!(index.num_documents(), 2);
//! assert_eq!(index.vocabulary().len(), 3);
//!
//! let query = index.vectorize_text("cancel it").unwrap();
//! assert!((query.norm() - 1.0).abs() < 1e-9);
//! ```

use ahash::AHashMap;
use log::{info, warn};

use crate::analysis::normalizer::TextNormalizer;
use crate::error::Result;
use crate::index::vocabulary::Vocabulary;
use crate::vector::sparse::SparseVector;

/// An immutable TF-IDF index.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    normalizer: TextNormalizer,
    vocabulary: Vocabulary,
    /// Document frequency per dimension.
    doc_frequencies: Vec<usize>,
    /// Smoothed inverse document frequency per dimension.
    idf: Vec<f64>,
    /// One unit (or zero) vector per document, in input order.
    documents: Vec<SparseVector>,
}

impl TfIdfIndex {
    /// Build the index from documents in order.
    pub fn build<I, S>(normalizer: TextNormalizer, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokenized = documents
            .into_iter()
            .map(|doc| normalizer.normalize(doc.as_ref()))
            .collect::<Result<Vec<Vec<String>>>>()?;

        let vocabulary = Vocabulary::from_documents(&tokenized);
        let doc_frequencies = Self::document_frequencies(&vocabulary, &tokenized);
        let idf = Self::smoothed_idf(tokenized.len(), &doc_frequencies);

        let mut index = TfIdfIndex {
            normalizer,
            vocabulary,
            doc_frequencies,
            idf,
            documents: Vec::with_capacity(tokenized.len()),
        };

        for (position, terms) in tokenized.iter().enumerate() {
            let vector = index.vectorize(terms);
            if vector.is_zero() {
                warn!("Document {position} has no indexable terms; it can only win by tie-break");
            }
            index.documents.push(vector);
        }

        info!(
            "Built TF-IDF index: {} documents, {} terms",
            index.documents.len(),
            index.vocabulary.len()
        );

        Ok(index)
    }

    fn document_frequencies(vocabulary: &Vocabulary, tokenized: &[Vec<String>]) -> Vec<usize> {
        let mut frequencies = vec![0; vocabulary.len()];
        for terms in tokenized {
            let mut seen: Vec<usize> = terms.iter().filter_map(|t| vocabulary.get(t)).collect();
            seen.sort_unstable();
            seen.dedup();
            for index in seen {
                frequencies[index] += 1;
            }
        }
        frequencies
    }

    fn smoothed_idf(num_documents: usize, doc_frequencies: &[usize]) -> Vec<f64> {
        let n = num_documents as f64;
        doc_frequencies
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect()
    }

    /// Raw term counts over the vocabulary; unknown terms are skipped.
    pub fn term_frequencies<S: AsRef<str>>(&self, terms: &[S]) -> SparseVector {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for term in terms {
            if let Some(index) = self.vocabulary.get(term.as_ref()) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        // Indices come from the vocabulary, so they are always in range.
        SparseVector::from_pairs(self.vocabulary.len(), counts)
            .unwrap_or_else(|_| SparseVector::zeros(self.vocabulary.len()))
    }

    /// Weight normalized terms into a unit TF-IDF vector.
    ///
    /// Out-of-vocabulary terms contribute nothing. If no term is known the
    /// result is the zero vector.
    pub fn vectorize<S: AsRef<str>>(&self, terms: &[S]) -> SparseVector {
        let mut vector = self.term_frequencies(terms);
        vector.scale_by(&self.idf);
        vector.normalize();
        vector
    }

    /// Normalize raw text and vectorize it.
    pub fn vectorize_text(&self, text: &str) -> Result<SparseVector> {
        let terms = self.normalizer.normalize(text)?;
        Ok(self.vectorize(&terms))
    }

    /// Get the normalizer used for documents and queries.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Get the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the document vectors, in document order.
    pub fn document_vectors(&self) -> &[SparseVector] {
        &self.documents
    }

    /// Number of indexed documents.
    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    /// Get the idf weight of a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|index| self.idf[index])
    }

    /// Get the document frequency of a term (zero if unknown).
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.vocabulary
            .get(term)
            .map(|index| self.doc_frequencies[index])
            .unwrap_or(0)
    }
}
