//! Top-N sentence selection for extractive summaries
//!
//! The highest-scoring sentences are picked, then put back into the order
//! in which they appear in the document before being joined.

use crate::pagerank::RankDiagnostics;
use crate::types::Sentence;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Scores are compared on this grid so that float noise between
/// mathematically tied sentences never overrides the index tie-break.
const SCORE_RESOLUTION: f64 = 1e12;

/// An extractive summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Sentence count asked for by the caller
    pub requested: usize,
    /// Indices of the selected sentences, ascending
    pub indices: Vec<usize>,
    /// The selected sentences, ascending by index
    pub sentences: Vec<SelectedSentence>,
    /// Selected sentence texts joined by single spaces
    pub text: String,
    /// How the centrality ranking finished, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<RankDiagnostics>,
}

impl SummaryResult {
    /// A summary with no sentences
    pub fn empty(requested: usize) -> Self {
        Self {
            requested,
            indices: Vec::new(),
            sentences: Vec::new(),
            text: String::new(),
            ranking: None,
        }
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no sentences were selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A selected sentence with its salience score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Picks the top-N scored sentences and restores document order
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExtractor;

impl SummaryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Select `requested` sentences from scored `sentences`
    ///
    /// `requested` is clamped to `[1, sentences.len()]`; no sentences gives
    /// an empty summary.
    pub fn select(&self, sentences: &[Sentence], requested: usize) -> SummaryResult {
        if sentences.is_empty() {
            return SummaryResult::empty(requested);
        }
        let take = requested.clamp(1, sentences.len());

        let mut ranked: Vec<&Sentence> = sentences.iter().collect();
        ranked.sort_by(|a, b| rank_order(a, b));
        ranked.truncate(take);
        ranked.sort_by_key(|s| s.index);

        let selected: Vec<SelectedSentence> = ranked
            .into_iter()
            .map(|s| SelectedSentence {
                index: s.index,
                text: s.text.clone(),
                score: s.score,
            })
            .collect();

        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        SummaryResult {
            requested,
            indices: selected.iter().map(|s| s.index).collect(),
            sentences: selected,
            text,
            ranking: None,
        }
    }
}

/// Score descending, then index ascending
fn rank_order(a: &Sentence, b: &Sentence) -> Ordering {
    quantize(b.score)
        .cmp(&quantize(a.score))
        .then(a.index.cmp(&b.index))
}

fn quantize(score: f64) -> i64 {
    if score.is_finite() {
        (score * SCORE_RESOLUTION).round() as i64
    } else {
        i64::MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[f64]) -> Vec<Sentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut s = Sentence::new(i, format!("S{}.", i), vec![format!("s{}", i)]);
                s.score = score;
                s
            })
            .collect()
    }

    #[test]
    fn test_selects_highest_scores() {
        let sentences = scored(&[0.1, 0.4, 0.2, 0.3]);
        let result = SummaryExtractor::new().select(&sentences, 2);
        assert_eq!(result.indices, vec![1, 3]);
        assert_eq!(result.text, "S1. S3.");
        assert_eq!(result.requested, 2);
    }

    #[test]
    fn test_document_order_not_rank_order() {
        let sentences = scored(&[0.05, 0.1, 0.6, 0.25]);
        let result = SummaryExtractor::new().select(&sentences, 3);
        assert_eq!(result.indices, vec![1, 2, 3]);
        for pair in result.sentences.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn test_ties_broken_by_index() {
        let sentences = scored(&[0.25, 0.25, 0.25, 0.25]);
        let result = SummaryExtractor::new().select(&sentences, 2);
        assert_eq!(result.indices, vec![0, 1]);
    }

    #[test]
    fn test_float_noise_counts_as_tie() {
        let sentences = scored(&[0.2, 0.2 + 1e-15, 0.6]);
        let result = SummaryExtractor::new().select(&sentences, 2);
        assert_eq!(result.indices, vec![0, 2]);
    }

    #[test]
    fn test_n_clamped_to_sentence_count() {
        let sentences = scored(&[0.5, 0.3, 0.2]);
        let result = SummaryExtractor::new().select(&sentences, 10);
        assert_eq!(result.indices, vec![0, 1, 2]);
        assert_eq!(result.text, "S0. S1. S2.");
        assert_eq!(result.requested, 10);
    }

    #[test]
    fn test_zero_requested_selects_one() {
        let sentences = scored(&[0.2, 0.8]);
        let result = SummaryExtractor::new().select(&sentences, 0);
        assert_eq!(result.indices, vec![1]);
    }

    #[test]
    fn test_empty_input() {
        let result = SummaryExtractor::new().select(&[], 5);
        assert!(result.is_empty());
        assert!(result.text.is_empty());
    }
}
