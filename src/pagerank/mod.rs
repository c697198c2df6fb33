//! Graph centrality ranking
//!
//! This module provides the LexRank power iteration over the sentence
//! similarity graph.

pub mod lexrank;

use serde::{Deserialize, Serialize};

/// Result of a centrality computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each sentence (indexed by sentence index), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1)
    pub delta: f64,
    /// Whether the tolerance was reached before the iteration cap
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific sentence
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Convergence information without the scores
    pub fn diagnostics(&self) -> RankDiagnostics {
        RankDiagnostics {
            iterations: self.iterations,
            delta: self.delta,
            converged: self.converged,
        }
    }
}

/// How the power iteration finished
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankDiagnostics {
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}
