//! Analysis requests and responses
//!
//! A request carries everything one analysis needs; the [`Analyzer`]
//! handling it keeps no per-request state.
//!
//! [`Analyzer`]: super::Analyzer

use crate::evaluation::rouge::EvaluationScore;
use crate::nlp::frequency::TermCount;
use crate::source::document::UploadedFile;
use crate::summarizer::selector::SummaryResult;
use serde::Serialize;

/// One unit of work for the analyzer
///
/// `sentence_count` of `None` means the configured default.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    /// Text typed or pasted in directly
    RawText {
        text: String,
        sentence_count: Option<usize>,
    },
    /// A PDF, DOCX, or plain-text upload
    UploadedFile {
        file: UploadedFile,
        sentence_count: Option<usize>,
    },
    /// A web article
    Url {
        url: String,
        sentence_count: Option<usize>,
    },
    /// Grade a candidate summary against a reference
    Evaluation { candidate: String, reference: String },
}

impl AnalysisRequest {
    pub fn raw_text(text: impl Into<String>, sentence_count: Option<usize>) -> Self {
        Self::RawText {
            text: text.into(),
            sentence_count,
        }
    }

    pub fn url(url: impl Into<String>, sentence_count: Option<usize>) -> Self {
        Self::Url {
            url: url.into(),
            sentence_count,
        }
    }

    pub fn evaluation(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::Evaluation {
            candidate: candidate.into(),
            reference: reference.into(),
        }
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RawText { .. } => "raw_text",
            Self::UploadedFile { .. } => "uploaded_file",
            Self::Url { .. } => "url",
            Self::Evaluation { .. } => "evaluation",
        }
    }
}

/// Everything shown for an analyzed text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The text that was analyzed, after extraction or fetch
    pub source_text: String,
    pub word_count: usize,
    pub summary: SummaryResult,
    /// Stopword-filtered words joined by spaces (word-cloud input)
    pub filtered_text: String,
    /// Most frequent filtered terms (bar-chart input)
    pub top_terms: Vec<TermCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResponse {
    Summary(AnalysisReport),
    Evaluation(EvaluationScore),
}

impl AnalysisResponse {
    pub fn as_report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Summary(report) => Some(report),
            Self::Evaluation(_) => None,
        }
    }

    pub fn as_evaluation(&self) -> Option<&EvaluationScore> {
        match self {
            Self::Evaluation(score) => Some(score),
            Self::Summary(_) => None,
        }
    }
}
