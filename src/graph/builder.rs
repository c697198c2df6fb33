//! Sentence similarity graph construction
//!
//! [`SimilarityGraphBuilder`] turns per-sentence term lists into TF-ISF
//! vectors and links every sentence pair whose cosine similarity reaches
//! the sparsification threshold. Edges accumulate in a mutable
//! [`GraphBuilder`] and are then frozen into a [`CsrGraph`].

use super::csr::CsrGraph;
use super::vector::TermVector;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Default similarity below which edges are dropped
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;

/// Sentence count above which pairwise similarity runs in parallel
const PARALLEL_MIN_SENTENCES: usize = 64;

/// A mutable, undirected graph over sentence indices
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Adjacency per node: neighbor -> weight
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl GraphBuilder {
    /// Create a graph with `num_nodes` isolated nodes
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); num_nodes],
        }
    }

    /// Set the weight of the undirected edge between two nodes
    ///
    /// Self-loops and out-of-range nodes are ignored.
    pub fn set_edge(&mut self, a: u32, b: u32, weight: f64) {
        if a == b || a as usize >= self.adjacency.len() || b as usize >= self.adjacency.len() {
            return;
        }
        self.adjacency[a as usize].insert(b, weight);
        self.adjacency[b as usize].insert(a, weight);
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(FxHashMap::len).sum::<usize>() / 2
    }

    /// Edges of a node
    pub fn edges(&self, node: u32) -> Option<&FxHashMap<u32, f64>> {
        self.adjacency.get(node as usize)
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Builds the sentence similarity graph of one document
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    /// Edges with similarity below this are omitted
    pub threshold: f64,
}

impl Default for SimilarityGraphBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl SimilarityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sparsification threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build TF-ISF vectors, one per sentence
    ///
    /// Term frequency is normalized by the sentence's most frequent term.
    /// Inverse sentence frequency is `ln(N / df) + 1`, computed over this
    /// document's sentences only, so every present term keeps a positive
    /// weight.
    pub fn vectorize<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Vec<TermVector> {
        let mut vocabulary: FxHashMap<&str, u32> = FxHashMap::default();
        let mut doc_freq: Vec<usize> = Vec::new();

        let counts: Vec<FxHashMap<u32, usize>> = sentences
            .iter()
            .map(|terms| {
                let mut tf: FxHashMap<u32, usize> = FxHashMap::default();
                for term in terms {
                    let next_id = vocabulary.len() as u32;
                    let id = *vocabulary.entry(term.as_ref()).or_insert(next_id);
                    if id as usize == doc_freq.len() {
                        doc_freq.push(0);
                    }
                    let count = tf.entry(id).or_insert(0);
                    if *count == 0 {
                        doc_freq[id as usize] += 1;
                    }
                    *count += 1;
                }
                tf
            })
            .collect();

        let n = sentences.len() as f64;
        let isf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| (n / df as f64).ln() + 1.0)
            .collect();

        counts
            .into_iter()
            .map(|tf| {
                let max_tf = tf.values().copied().max().unwrap_or(0);
                if max_tf == 0 {
                    return TermVector::new();
                }
                let weights = tf
                    .into_iter()
                    .map(|(id, count)| (id, count as f64 / max_tf as f64 * isf[id as usize]))
                    .collect();
                TermVector::from_weights(weights)
            })
            .collect()
    }

    /// Build the similarity graph for the given sentence term lists
    pub fn build<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> CsrGraph {
        let vectors = self.vectorize(sentences);
        let builder = self.link(&vectors);

        debug!(
            sentences = builder.node_count(),
            edges = builder.edge_count(),
            threshold = self.threshold,
            "built similarity graph"
        );

        CsrGraph::from_builder(&builder)
    }

    /// Link every pair of vectors whose similarity reaches the threshold
    pub fn link(&self, vectors: &[TermVector]) -> GraphBuilder {
        let n = vectors.len();
        let mut builder = GraphBuilder::with_nodes(n);

        let row = |i: usize| -> Vec<(u32, f64)> {
            ((i + 1)..n)
                .filter_map(|j| {
                    let sim = vectors[i].cosine_similarity(&vectors[j]);
                    (sim > 0.0 && sim >= self.threshold).then_some((j as u32, sim))
                })
                .collect()
        };

        // Rows are collected in index order on both paths, so the result
        // does not depend on which one ran.
        let rows: Vec<Vec<(u32, f64)>> = if n >= PARALLEL_MIN_SENTENCES {
            (0..n).into_par_iter().map(row).collect()
        } else {
            (0..n).map(row).collect()
        };

        for (i, edges) in rows.into_iter().enumerate() {
            for (j, weight) in edges {
                builder.set_edge(i as u32, j, weight);
            }
        }

        builder
    }
}
