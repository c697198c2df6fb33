//! Term frequency counting for the top-K display

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Default number of terms returned
pub const DEFAULT_TOP_K: usize = 10;

/// A term and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Counts term occurrences and reports the most frequent ones
#[derive(Debug, Clone, Copy)]
pub struct FrequencyCounter {
    top_k: usize,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl FrequencyCounter {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    /// Top terms using this counter's K
    pub fn count<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TermCount> {
        top_terms(tokens, self.top_k)
    }
}

/// The `k` most frequent tokens, by count descending
///
/// Ties are broken by the position of each token's first occurrence.
pub fn top_terms<S: AsRef<str>>(tokens: &[S], k: usize) -> Vec<TermCount> {
    // term -> (count, first position)
    let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (pos, token) in tokens.iter().enumerate() {
        counts.entry(token.as_ref()).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(k);

    ranked
        .into_iter()
        .map(|(term, (count, _))| TermCount::new(term, count))
        .collect()
}
