//! # text_analyzer
//!
//! Extractive summarization and summary evaluation for short articles.
//!
//! Sentences are ranked by LexRank centrality over a TF-ISF cosine
//! similarity graph, and the top-ranked ones are returned in document
//! order. Summaries are graded against a reference with ROUGE-1, ROUGE-2,
//! and ROUGE-L. Text can come from a string, an uploaded PDF/DOCX/TXT file,
//! or a web article.
//!
//! ```no_run
//! let summary = text_analyzer::summarize("First sentence. Second one.", 1)?;
//! println!("{}", summary.text);
//! # Ok::<(), text_analyzer::AnalyzerError>(())
//! ```

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, AnalyzerConfig};
pub use errors::{AnalyzerError, Result};
pub use types::{Document, Sentence};

// Re-export main functionality
pub use evaluation::rouge::{EvaluationScore, RougeEvaluator, ScoreTriple};
pub use graph::{builder::SimilarityGraphBuilder, csr::CsrGraph, csr::SimilarityGraph};
pub use nlp::{
    frequency::{FrequencyCounter, TermCount},
    preprocess::Preprocessor,
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{lexrank::LexRank, RankDiagnostics, RankResult};
pub use pipeline::{AnalysisReport, AnalysisRequest, AnalysisResponse, Analyzer, QuotaGate};
pub use source::{ArticleFetcher, DocumentFormat, HttpArticleFetcher, OfflineFetcher, UploadedFile};
pub use summarizer::selector::{SelectedSentence, SummaryExtractor, SummaryResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` into up to `sentence_count` sentences with default settings
///
/// Returns [`AnalyzerError::EmptyInput`] when the text has no sentences and
/// [`AnalyzerError::QuotaExceeded`] when it is over the default word limit.
pub fn summarize(text: &str, sentence_count: usize) -> Result<SummaryResult> {
    Analyzer::with_fetcher(AnalyzerConfig::default(), OfflineFetcher)?
        .summarize(text, sentence_count)
}

/// ROUGE-1, ROUGE-2, and ROUGE-L of `candidate` against `reference`
pub fn evaluate(candidate: &str, reference: &str) -> EvaluationScore {
    RougeEvaluator::new().evaluate(candidate, reference)
}

/// The `k` most frequent tokens, ties broken by first occurrence
pub fn top_terms<S: AsRef<str>>(tokens: &[S], k: usize) -> Vec<TermCount> {
    nlp::frequency::top_terms(tokens, k)
}
