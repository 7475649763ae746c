//! Term vocabulary: normalized term to dimension index.

use std::collections::BTreeSet;

use ahash::AHashMap;

/// A fixed mapping from terms to vector dimensions.
///
/// Terms are assigned indices in lexicographic order, so the same set of
/// terms always produces the same mapping.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Sorted terms; a term's position is its index.
    terms: Vec<String>,
    /// Term to index lookup.
    lookup: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from the union of the given term sequences.
    pub fn from_documents<D, T>(documents: D) -> Self
    where
        D: IntoIterator<Item = T>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let distinct: BTreeSet<String> = documents
            .into_iter()
            .flat_map(|terms| terms.into_iter().map(|t| t.as_ref().to_string()))
            .collect();

        let terms: Vec<String> = distinct.into_iter().collect();
        let lookup = terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        Vocabulary { terms, lookup }
    }

    /// Look up the index of a term.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.lookup.get(term).copied()
    }

    /// Check whether a term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains_key(term)
    }

    /// Get the term stored at an index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(index, term)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.terms.iter().enumerate().map(|(i, t)| (i, t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_documents() {
        let vocabulary = Vocabulary::from_documents(vec![
            vec!["order", "12345"],
            vec!["cancel", "order"],
        ]);

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.get("12345"), Some(0));
        assert_eq!(vocabulary.get("cancel"), Some(1));
        assert_eq!(vocabulary.get("order"), Some(2));
        assert_eq!(vocabulary.get("refund"), None);
        assert_eq!(vocabulary.term(1), Some("cancel"));
        assert_eq!(vocabulary.term(3), None);
    }

    #[test]
    fn test_assignment_is_order_independent() {
        let a = Vocabulary::from_documents(vec![vec!["b", "a"], vec!["c"]]);
        let b = Vocabulary::from_documents(vec![vec!["c"], vec!["a", "b", "a"]]);

        let a_terms: Vec<_> = a.iter().collect();
        let b_terms: Vec<_> = b.iter().collect();
        assert_eq!(a_terms, b_terms);
    }

    #[test]
    fn test_empty() {
        let vocabulary = Vocabulary::from_documents(Vec::<Vec<String>>::new());
        assert!(vocabulary.is_empty());
        assert!(!vocabulary.contains("anything"));
    }
}
