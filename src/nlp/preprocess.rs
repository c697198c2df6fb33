//! Stopword-filtered term stream for the frequency and word-cloud features
//!
//! This stream is deliberately separate from the ranking input: the ranker
//! works on every term of a sentence, stopwords included.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// Produces the stopword-filtered view of a text
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    stopwords: StopwordFilter,
}

impl Preprocessor {
    /// Create a preprocessor with the given stopword list
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Lower-cased words of `text` with stopwords removed, in document order
    pub fn filtered_terms(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }

    /// The filtered terms joined by single spaces (word-cloud input)
    pub fn filtered_text(&self, text: &str) -> String {
        self.filtered_terms(text).join(" ")
    }

    /// The stopword list in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stopwords_and_punctuation() {
        let pre = Preprocessor::default();
        let terms = pre.filtered_terms("The graph, and the centrality, of LexRank.");
        assert_eq!(terms, vec!["graph", "centrality", "lexrank"]);
    }

    #[test]
    fn test_filtered_text_joins_with_spaces() {
        let pre = Preprocessor::default();
        assert_eq!(pre.filtered_text("A graph of THE sentences"), "graph sentences");
    }

    #[test]
    fn test_empty_input() {
        let pre = Preprocessor::default();
        assert!(pre.filtered_terms("").is_empty());
        assert!(pre.filtered_terms("the of and").is_empty());
    }
}
