//! Core document types
//!
//! A [`Document`] is built fresh for each analysis request and owns its
//! sentences. Sentence indices are assigned once, in reading order, and
//! define the order of every summary drawn from the document.

use crate::nlp::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document (zero-based, never reused)
    pub index: usize,
    /// The sentence text, trimmed
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text
    pub end: usize,
    /// Lower-cased terms, punctuation stripped
    pub terms: Vec<String>,
    /// Salience score assigned by the centrality ranker
    pub score: f64,
}

impl Sentence {
    /// Create a new, unscored sentence
    pub fn new(index: usize, text: impl Into<String>, terms: Vec<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            index,
            text,
            start: 0,
            end,
            terms,
            score: 0.0,
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// A tokenized input text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The raw text
    pub text: String,
    /// Sentences in reading order
    pub sentences: Vec<Sentence>,
    /// Whitespace-separated word count of the raw text
    pub word_count: usize,
}

impl Document {
    /// Tokenize `text` into a document
    ///
    /// Fragments without a single word ("...", "!!") are dropped, so
    /// indices count only real sentences.
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        let sentences = tokenizer
            .split_sentences(text)
            .into_iter()
            .filter_map(|span| {
                let terms = tokenizer.terms(&span.text);
                (!terms.is_empty()).then_some((span, terms))
            })
            .enumerate()
            .map(|(index, (span, terms))| Sentence {
                index,
                text: span.text,
                start: span.start,
                end: span.end,
                terms,
                score: 0.0,
            })
            .collect();

        Self {
            text: text.to_string(),
            sentences,
            word_count: word_count(text),
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Assign scores to sentences by index
    ///
    /// Sentences without a corresponding score keep 0.
    pub fn apply_scores(&mut self, scores: &[f64]) {
        for sentence in &mut self.sentences {
            sentence.score = scores.get(sentence.index).copied().unwrap_or(0.0);
        }
    }
}

/// Number of whitespace-separated words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
