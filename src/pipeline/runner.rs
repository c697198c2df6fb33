//! Analyzer: orchestrates quota, tokenization, ranking, and selection
//!
//! The [`Analyzer`] holds only immutable configuration and a stopword set,
//! so one instance can serve any number of requests, from any number of
//! threads. Every request builds its own [`Document`] and graph and drops
//! them when the response is produced.

use crate::config::AnalyzerConfig;
use crate::errors::{AnalyzerError, Result};
use crate::evaluation::rouge::{EvaluationScore, RougeEvaluator};
use crate::graph::builder::SimilarityGraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::frequency::{FrequencyCounter, TermCount};
use crate::nlp::preprocess::Preprocessor;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::lexrank::LexRank;
use crate::pipeline::quota::QuotaGate;
use crate::pipeline::request::{AnalysisReport, AnalysisRequest, AnalysisResponse};
use crate::source::article::{validate_url, ArticleFetcher, HttpArticleFetcher};
use crate::summarizer::selector::{SummaryExtractor, SummaryResult};
use crate::types::Document;
use tracing::{debug, info, warn};

/// Enter a debug span for one analysis stage; it closes at the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("analysis_stage", stage = $name).entered();
    };
}

pub const STAGE_QUOTA: &str = "quota";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_FREQUENCY: &str = "frequency";

/// Text analyzer
///
/// `F` fetches web articles for [`AnalysisRequest::Url`]; tests swap in a
/// fetcher that never touches the network.
#[derive(Debug, Clone)]
pub struct Analyzer<F = HttpArticleFetcher> {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    preprocessor: Preprocessor,
    quota: QuotaGate,
    fetcher: F,
}

impl Analyzer<HttpArticleFetcher> {
    /// Create an analyzer that fetches URLs over HTTP
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let fetcher = HttpArticleFetcher::new(&config.source)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: ArticleFetcher> Analyzer<F> {
    /// Create an analyzer with a custom article fetcher
    pub fn with_fetcher(config: AnalyzerConfig, fetcher: F) -> Result<Self> {
        config.validate()?;

        let mut stopwords = StopwordFilter::for_language(&config.frequency.language)?;
        stopwords.extend(&config.frequency.extra_stopwords);

        Ok(Self {
            quota: QuotaGate::new(config.summary.word_limit),
            tokenizer: Tokenizer::new(),
            preprocessor: Preprocessor::new(stopwords),
            config,
            fetcher,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Extractive summary of `text` with up to `sentence_count` sentences
    ///
    /// `sentence_count` is clamped to the number of sentences; the request
    /// layer is where out-of-range counts are rejected.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<SummaryResult> {
        {
            trace_stage!(STAGE_QUOTA);
            self.quota.check(text)?;
        }

        let mut document = {
            trace_stage!(STAGE_TOKENIZE);
            Document::parse(text, &self.tokenizer)
        };
        if document.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }
        debug!(
            sentences = document.len(),
            words = document.word_count,
            "tokenized document"
        );

        let graph = {
            trace_stage!(STAGE_GRAPH);
            self.similarity_graph(&document)
        };

        let ranked = {
            trace_stage!(STAGE_RANK);
            let ranking = &self.config.ranking;
            LexRank::new()
                .with_damping(ranking.damping)
                .with_tolerance(ranking.tolerance)
                .with_max_iterations(ranking.max_iterations)
                .rank(&graph)
        };
        document.apply_scores(&ranked.scores);

        trace_stage!(STAGE_SELECT);
        let mut summary = SummaryExtractor::new().select(&document.sentences, sentence_count);
        summary.ranking = Some(ranked.diagnostics());
        debug!(
            selected = summary.len(),
            requested = sentence_count,
            iterations = ranked.iterations,
            "selected summary sentences"
        );
        Ok(summary)
    }

    /// Sentence similarity graph, with stopwords left out of the vectors
    /// when `ranking.filter_stopwords` is set
    fn similarity_graph(&self, document: &Document) -> CsrGraph {
        let ranking = &self.config.ranking;
        let stopwords = self.preprocessor.stopwords();
        let terms: Vec<Vec<&str>> = document
            .sentences
            .iter()
            .map(|s| {
                if ranking.filter_stopwords {
                    stopwords.retain_content(&s.terms)
                } else {
                    s.terms.iter().map(String::as_str).collect()
                }
            })
            .collect();
        SimilarityGraphBuilder::new()
            .with_threshold(ranking.similarity_threshold)
            .build(&terms)
    }

    /// Summary plus the word-cloud and bar-chart data for `text`
    pub fn analyze_text(&self, text: &str, sentence_count: usize) -> Result<AnalysisReport> {
        let summary = self.summarize(text, sentence_count)?;

        trace_stage!(STAGE_FREQUENCY);
        let filtered = self.preprocessor.filtered_terms(text);
        let top_terms = FrequencyCounter::new(self.config.frequency.top_k).count(&filtered);

        Ok(AnalysisReport {
            source_text: text.to_string(),
            word_count: crate::types::word_count(text),
            summary,
            filtered_text: filtered.join(" "),
            top_terms,
        })
    }

    /// Score `candidate` against `reference`
    pub fn evaluate(&self, candidate: &str, reference: &str) -> EvaluationScore {
        RougeEvaluator::new()
            .with_lcs_beta(self.config.evaluation.lcs_beta)
            .evaluate(candidate, reference)
    }

    /// Most frequent non-stopword terms of `text`, using the configured K
    pub fn top_terms(&self, text: &str) -> Vec<TermCount> {
        let filtered = self.preprocessor.filtered_terms(text);
        FrequencyCounter::new(self.config.frequency.top_k).count(&filtered)
    }

    /// Handle one request end to end
    pub fn handle(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let kind = request.kind();
        let span = tracing::info_span!("analysis_request", kind);
        let _guard = span.enter();

        let result = self.dispatch(request);
        match &result {
            Ok(_) => info!(kind, "request handled"),
            Err(e) if e.is_insufficient_data() => info!(kind, "insufficient data"),
            Err(e) => warn!(kind, error = %e, "request rejected"),
        }
        result
    }

    fn dispatch(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        match request {
            AnalysisRequest::RawText {
                text,
                sentence_count,
            } => {
                let n = self.resolve_sentence_count(sentence_count)?;
                self.analyze_text(&text, n).map(AnalysisResponse::Summary)
            }
            AnalysisRequest::UploadedFile {
                file,
                sentence_count,
            } => {
                let n = self.resolve_sentence_count(sentence_count)?;
                let text = file.extract_text()?;
                self.analyze_text(&text, n).map(AnalysisResponse::Summary)
            }
            AnalysisRequest::Url {
                url,
                sentence_count,
            } => {
                let n = self.resolve_sentence_count(sentence_count)?;
                let url = validate_url(&url)?;
                let text = self.fetcher.fetch(&url)?;
                self.analyze_text(&text, n).map(AnalysisResponse::Summary)
            }
            AnalysisRequest::Evaluation {
                candidate,
                reference,
            } => {
                if candidate.trim().is_empty() || reference.trim().is_empty() {
                    return Err(AnalyzerError::invalid_request(
                        "candidate and reference summaries must both be non-empty",
                    ));
                }
                Ok(AnalysisResponse::Evaluation(
                    self.evaluate(&candidate, &reference),
                ))
            }
        }
    }

    fn resolve_sentence_count(&self, requested: Option<usize>) -> Result<usize> {
        let max = self.config.summary.max_sentences;
        let n = requested.unwrap_or(self.config.summary.default_sentences);
        if !(1..=max).contains(&n) {
            return Err(AnalyzerError::invalid_request(format!(
                "sentence count must be between 1 and {}, got {}",
                max, n
            )));
        }
        Ok(n)
    }
}
