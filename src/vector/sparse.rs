//! Sparse vector representation.
//!
//! Term-weight vectors over a vocabulary are mostly zeros, so only non-zero
//! components are stored, as `(dimension index, weight)` pairs sorted by
//! index. Sorted storage makes dot products a linear merge and keeps every
//! floating-point sum in the same order for the same pair of vectors.

use serde::{Deserialize, Serialize};

use crate::error::{LexreplyError, Result};

/// A sparse vector with a fixed dimensionality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparseVector {
    dimension: usize,
    /// Non-zero components, strictly increasing by index.
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Create an all-zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        SparseVector {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(index, weight)` pairs.
    ///
    /// Pairs may come in any order; weights for a repeated index are summed
    /// and zero weights are dropped. Fails if an index is out of range.
    pub fn from_pairs<I>(dimension: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut entries: Vec<(usize, f64)> = pairs.into_iter().collect();
        if let Some(&(index, _)) = entries.iter().find(|(index, _)| *index >= dimension) {
            return Err(LexreplyError::InvalidOperation(format!(
                "Component index {index} out of range for dimension {dimension}"
            )));
        }

        entries.sort_by_key(|(index, _)| *index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == index => *total += weight,
                _ => merged.push((index, weight)),
            }
        }
        merged.retain(|(_, weight)| *weight != 0.0);

        Ok(SparseVector {
            dimension,
            entries: merged,
        })
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the non-zero components, sorted by index.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Get the number of non-zero components.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Check whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the component at `index` (zero if absent).
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Multiply each component by a per-dimension weight.
    pub fn scale_by(&mut self, weights: &[f64]) {
        for (index, value) in &mut self.entries {
            *value *= weights[*index];
        }
        self.entries.retain(|(_, weight)| *weight != 0.0);
    }

    /// Calculate the Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Normalize this vector to unit length in place.
    ///
    /// A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, value) in &mut self.entries {
                *value /= norm;
            }
        }
    }

    /// Calculate the dot product with another vector of the same dimension.
    pub fn dot(&self, other: &SparseVector) -> Result<f64> {
        if self.dimension != other.dimension {
            return Err(LexreplyError::InvalidOperation(format!(
                "Vector dimensions must match ({} vs {})",
                self.dimension, other.dimension
            )));
        }

        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_value) = self.entries[i];
            let (b_index, b_value) = other.entries[j];
            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_value * b_value;
                    i += 1;
                    j += 1;
                }
            }
        }

        Ok(sum)
    }

    /// Expand into a dense vector.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &(index, value) in &self.entries {
            dense[index] = value;
        }
        dense
    }
}
