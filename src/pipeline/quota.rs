//! Word-count quota applied before any analysis work

use crate::errors::{AnalyzerError, Result};
use crate::types::word_count;

/// Rejects documents with more words than the configured limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaGate {
    limit: usize,
}

impl QuotaGate {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Count the whitespace-separated words of `text`
    ///
    /// Exactly `limit` words is accepted; one more is rejected.
    pub fn check(&self, text: &str) -> Result<usize> {
        let words = word_count(text);
        if words > self.limit {
            tracing::warn!(words, limit = self.limit, "document over word limit");
            return Err(AnalyzerError::QuotaExceeded {
                words,
                limit: self.limit,
            });
        }
        Ok(words)
    }
}

impl Default for QuotaGate {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_boundary() {
        let gate = QuotaGate::default();
        assert_eq!(gate.check(&words(1000)).unwrap(), 1000);
        let err = gate.check(&words(1001)).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::QuotaExceeded {
                words: 1001,
                limit: 1000
            }
        ));
    }

    #[test]
    fn test_counts_whitespace_tokens() {
        let gate = QuotaGate::new(3);
        assert_eq!(gate.check("  one\ttwo\n\nthree ").unwrap(), 3);
        assert!(gate.check("one two three four").is_err());
        assert_eq!(gate.check("").unwrap(), 0);
    }
}
