//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate. The filter only feeds
//! the frequency and word-cloud features; ranking sees unfiltered terms
//! unless explicitly configured otherwise.

use crate::errors::{AnalyzerError, Result};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of lower-cased stopwords
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The English stopword list
    pub fn english() -> Self {
        Self::from_language(LANGUAGE::English)
    }

    /// Stopwords for a language code or name (`"en"`, `"german"`, ...)
    ///
    /// Unknown languages are a configuration error rather than a silent
    /// fallback to English.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                return Err(AnalyzerError::invalid_config(format!(
                    "no stopword list for language '{}'",
                    other
                )))
            }
        };
        Ok(Self::from_language(lang))
    }

    /// Build a filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    fn from_language(lang: LANGUAGE) -> Self {
        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Add words to the list
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        self.stopwords
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Check whether a term is a stopword (case-insensitive)
    pub fn is_stopword(&self, term: &str) -> bool {
        if self.stopwords.contains(term) {
            return true;
        }
        term.chars().any(char::is_uppercase) && self.stopwords.contains(&term.to_lowercase())
    }

    /// Keep only the terms that are not stopwords, preserving order
    pub fn retain_content<'a, S: AsRef<str>>(&self, terms: &'a [S]) -> Vec<&'a str> {
        terms
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    /// Number of stopwords in the list
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("centrality"));
        assert!(!filter.is_stopword("graph"));
    }

    #[test]
    fn test_language_lookup() {
        let german = StopwordFilter::for_language("de").unwrap();
        assert!(german.is_stopword("und"));

        let by_name = StopwordFilter::for_language("French").unwrap();
        assert!(by_name.is_stopword("le"));
    }

    #[test]
    fn test_unknown_language_is_error() {
        let err = StopwordFilter::for_language("klingon").unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_list_and_extend() {
        let mut filter = StopwordFilter::from_list(&["Foo"]);
        assert!(filter.is_stopword("foo"));
        assert!(!filter.is_stopword("bar"));

        filter.extend(&["BAR"]);
        assert!(filter.is_stopword("bar"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_retain_content_keeps_order() {
        let filter = StopwordFilter::english();
        let terms = vec!["the", "graph", "is", "sparse"];
        assert_eq!(filter.retain_content(&terms), vec!["graph", "sparse"]);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }
}
