//! LexRank sentence centrality
//!
//! Power iteration of
//! `score_i = (1 - d)/N + d * sum_j (w_ij / sum_k w_jk) * score_j`
//! over the similarity graph, starting from the uniform distribution.
//! Sentences without edges spread their mass uniformly, so the scores
//! remain a probability distribution on every iteration.

use super::RankResult;
use crate::graph::csr::CsrGraph;
use tracing::{debug, warn};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Default L1 convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// LexRank centrality ranker
#[derive(Debug, Clone)]
pub struct LexRank {
    /// Damping factor
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Stop once the L1 change between iterations falls below this
    pub tolerance: f64,
}

impl Default for LexRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LexRank {
    /// Create a new LexRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Score every sentence of the graph
    ///
    /// Returns the scores even if the tolerance wasn't reached, with
    /// `converged = false`.
    pub fn rank(&self, graph: &CsrGraph) -> RankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        let uniform = 1.0 / n as f64;
        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];

        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= self.tolerance {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d]).sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &score) in scores.iter().enumerate() {
                let total = graph.node_total_weight(node);
                if total > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node) {
                        next[neighbor] += self.damping * score * weight / total;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        // Already ~1; renormalize against accumulated rounding
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta < self.tolerance;
        if converged {
            debug!(sentences = n, iterations, delta, "lexrank converged");
        } else {
            warn!(
                sentences = n,
                iterations, delta, "lexrank stopped at iteration cap before converging"
            );
        }

        RankResult::new(scores, iterations, delta, converged)
    }
}
