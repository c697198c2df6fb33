//! Error types for text_analyzer
//!
//! Only structurally invalid requests surface as errors. Numerical
//! degenerate cases (empty graphs, zero vectors, empty token sequences)
//! are resolved inside the ranker and the evaluator and never reach here.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors surfaced to callers of the analyzer
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The input produced no sentences or tokens
    #[error("insufficient data: input contains no sentences")]
    EmptyInput,

    /// The document is over the configured word limit
    #[error("document has {words} words, limit is {limit}")]
    QuotaExceeded { words: usize, limit: usize },

    /// The URL is malformed or uses an unsupported scheme
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The uploaded document type is not recognized
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The request carries out-of-range parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A document could not be turned into text
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// A URL could not be fetched or yielded no article
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl AnalyzerError {
    /// Create an invalid-request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an invalid-config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Whether this error is the "insufficient data" signal rather than a failure
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Insufficient Data".to_string(),
            Self::QuotaExceeded { limit, .. } => format!(
                "Words are more than {}. Subscribe to Text Article Analyzer PRO",
                limit
            ),
            Self::InvalidUrl(_) => "Not a Valid URL".to_string(),
            Self::UnsupportedFormat(kind) => {
                format!("Unsupported document type: {}. Upload a PDF, DOCX, or TXT file", kind)
            }
            Self::InvalidRequest(_) | Self::InvalidConfig(_) => "Please Check Inputs".to_string(),
            other => other.to_string(),
        }
    }
}
