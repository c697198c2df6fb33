//! Sparse TF-ISF term vectors for sentences
//!
//! Dimensions are term IDs from a per-document vocabulary. Vectors are
//! stored L2-normalized so cosine similarity is a plain dot product.

use rustc_hash::FxHashMap;

/// A sparse, L2-normalized term vector
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Non-zero dimensions: term ID -> normalized weight
    pub dimensions: FxHashMap<u32, f64>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl TermVector {
    /// Create an empty (zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw weights, normalizing to unit length
    ///
    /// Non-positive weights are dropped. A vector whose weights are all
    /// dropped is the zero vector.
    pub fn from_weights(mut dimensions: FxHashMap<u32, f64>) -> Self {
        dimensions.retain(|_, w| *w > 0.0);
        let norm = dimensions.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity with another vector, in [0, 1]
    ///
    /// Zero vectors have similarity 0 with everything.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .dimensions
            .iter()
            .filter_map(|(term, w)| large.dimensions.get(term).map(|o| w * o))
            .sum();
        dot.clamp(0.0, 1.0)
    }

    /// Whether this is the zero vector
    pub fn is_zero(&self) -> bool {
        self.dimensions.is_empty()
    }
}
