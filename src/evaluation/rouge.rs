//! ROUGE-style overlap scoring between a candidate and a reference text
//!
//! ROUGE-1 and ROUGE-2 count clipped n-gram overlap; ROUGE-L uses the
//! longest common subsequence of the two token sequences. Every statistic
//! whose denominator is zero is reported as 0.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Precision, recall, and F-measure for one metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTriple {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ScoreTriple {
    /// Build a triple from a match count and the two sequence sizes
    ///
    /// `beta` weights recall over precision; 1.0 is the harmonic mean.
    pub fn from_counts(matched: usize, candidate_total: usize, reference_total: usize, beta: f64) -> Self {
        let precision = ratio(matched, candidate_total);
        let recall = ratio(matched, reference_total);
        Self {
            precision,
            recall,
            f1: f_measure(precision, recall, beta),
        }
    }
}

/// Scores for all three metric variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationScore {
    #[serde(rename = "rouge-1")]
    pub rouge_1: ScoreTriple,
    #[serde(rename = "rouge-2")]
    pub rouge_2: ScoreTriple,
    #[serde(rename = "rouge-l")]
    pub rouge_l: ScoreTriple,
}

impl EvaluationScore {
    /// (name, scores) for each metric, in display order
    pub fn metrics(&self) -> [(&'static str, ScoreTriple); 3] {
        [
            ("rouge-1", self.rouge_1),
            ("rouge-2", self.rouge_2),
            ("rouge-l", self.rouge_l),
        ]
    }
}

/// Grades a candidate summary against a reference
#[derive(Debug, Clone, Copy)]
pub struct RougeEvaluator {
    /// F-measure weight for ROUGE-L
    pub lcs_beta: f64,
}

impl Default for RougeEvaluator {
    fn default() -> Self {
        Self { lcs_beta: 1.0 }
    }
}

impl RougeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ROUGE-L F-measure beta
    pub fn with_lcs_beta(mut self, beta: f64) -> Self {
        self.lcs_beta = beta;
        self
    }

    /// Score `candidate` against `reference`
    pub fn evaluate(&self, candidate: &str, reference: &str) -> EvaluationScore {
        let cand = tokenize(candidate);
        let refr = tokenize(reference);

        EvaluationScore {
            rouge_1: ngram_score(&cand, &refr, 1),
            rouge_2: ngram_score(&cand, &refr, 2),
            rouge_l: ScoreTriple::from_counts(
                lcs_length(&cand, &refr),
                cand.len(),
                refr.len(),
                self.lcs_beta,
            ),
        }
    }
}

/// Lower-case, turn every non-alphanumeric character into a space, split
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> FxHashMap<&[String], usize> {
    let mut counts = FxHashMap::default();
    if n == 0 {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// ROUGE-N with clipped counts
pub fn ngram_score(candidate: &[String], reference: &[String], n: usize) -> ScoreTriple {
    let cand = ngram_counts(candidate, n);
    let refr = ngram_counts(reference, n);

    let overlap: usize = cand
        .iter()
        .filter_map(|(gram, &c)| refr.get(gram).map(|&r| c.min(r)))
        .sum();

    ScoreTriple::from_counts(
        overlap,
        cand.values().sum(),
        refr.values().sum(),
        1.0,
    )
}

/// Exact longest common subsequence length, O(|a|·|b|) time, O(|b|) space
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn f_measure(precision: f64, recall: f64, beta: f64) -> f64 {
    let beta2 = beta * beta;
    let den = recall + beta2 * precision;
    if den <= 0.0 {
        0.0
    } else {
        (1.0 + beta2) * precision * recall / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        tokenize(s)
    }

    fn assert_triple(t: ScoreTriple, p: f64, r: f64, f: f64) {
        assert!((t.precision - p).abs() < 1e-9, "precision {} != {}", t.precision, p);
        assert!((t.recall - r).abs() < 1e-9, "recall {} != {}", t.recall, r);
        assert!((t.f1 - f).abs() < 1e-9, "f1 {} != {}", t.f1, f);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(toks("The cat's hat, OK?"), vec!["the", "cat", "s", "hat", "ok"]);
        assert!(toks("  ... ").is_empty());
    }

    #[test]
    fn test_identity() {
        let score = RougeEvaluator::new().evaluate("the cat sat on the mat", "the cat sat on the mat");
        for (_, triple) in score.metrics() {
            assert_triple(triple, 1.0, 1.0, 1.0);
        }
    }

    #[test]
    fn test_disjoint() {
        let score = RougeEvaluator::new().evaluate("a b c", "d e f");
        for (_, triple) in score.metrics() {
            assert_triple(triple, 0.0, 0.0, 0.0);
        }
    }

    #[test]
    fn test_partial_overlap() {
        // candidate: the cat was found under the bed
        // reference: the cat was under the bed
        let score = RougeEvaluator::new().evaluate(
            "the cat was found under the bed",
            "the cat was under the bed",
        );
        assert_triple(score.rouge_1, 6.0 / 7.0, 1.0, 12.0 / 13.0);
        // bigrams shared: the cat, cat was, under the, the bed
        assert_triple(score.rouge_2, 4.0 / 6.0, 4.0 / 5.0, 2.0 * (4.0 / 6.0) * 0.8 / (4.0 / 6.0 + 0.8));
        assert_triple(score.rouge_l, 6.0 / 7.0, 1.0, 12.0 / 13.0);
    }

    #[test]
    fn test_clipped_counts() {
        let t = ngram_score(&toks("the the the the"), &toks("the cat"), 1);
        // only one "the" in the reference may match
        assert_triple(t, 0.25, 0.5, 2.0 * 0.25 * 0.5 / 0.75);
    }

    #[test]
    fn test_empty_inputs_are_zero() {
        let eval = RougeEvaluator::new();
        for (c, r) in [("", ""), ("", "some words"), ("some words", ""), ("!!!", "?")] {
            let score = eval.evaluate(c, r);
            for (_, triple) in score.metrics() {
                assert_triple(triple, 0.0, 0.0, 0.0);
            }
        }
    }

    #[test]
    fn test_single_token_has_no_bigrams() {
        let score = RougeEvaluator::new().evaluate("word", "word");
        assert_triple(score.rouge_1, 1.0, 1.0, 1.0);
        assert_triple(score.rouge_2, 0.0, 0.0, 0.0);
        assert_triple(score.rouge_l, 1.0, 1.0, 1.0);
    }

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length(&toks("a b c d e"), &toks("a c e")), 3);
        assert_eq!(lcs_length(&toks("a b c"), &toks("c b a")), 1);
        assert_eq!(lcs_length::<String>(&[], &toks("a")), 0);
        assert_eq!(lcs_length(&[1, 2, 3, 2, 4, 1, 2], &[2, 4, 3, 1, 2, 1]), 4);
    }

    #[test]
    fn test_lcs_beta_weights_recall() {
        // precision 1/4, recall 1/2 for ROUGE-L
        let balanced = RougeEvaluator::new().evaluate("x a y z", "a b");
        let recall_heavy = RougeEvaluator::new().with_lcs_beta(2.0).evaluate("x a y z", "a b");
        assert!(recall_heavy.rouge_l.f1 > balanced.rouge_l.f1);
        assert_eq!(recall_heavy.rouge_l.precision, balanced.rouge_l.precision);
        assert_eq!(recall_heavy.rouge_l.recall, balanced.rouge_l.recall);
    }

    #[test]
    fn test_serialized_metric_names() {
        let json = serde_json::to_value(EvaluationScore::default()).unwrap();
        assert!(json.get("rouge-1").is_some());
        assert!(json.get("rouge-2").is_some());
        assert!(json.get("rouge-l").is_some());
    }
}
