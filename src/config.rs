//! Analyzer configuration
//!
//! Every knob has a default, so a TOML file only needs the keys it
//! changes. The full set, with defaults:
//!
//! ```toml
//! [summary]
//! default_sentences = 5
//! max_sentences = 20
//! word_limit = 1000
//!
//! [ranking]
//! damping = 0.85
//! tolerance = 1e-4
//! max_iterations = 100
//! similarity_threshold = 0.1
//! filter_stopwords = false
//!
//! [evaluation]
//! lcs_beta = 1.0
//!
//! [frequency]
//! top_k = 10
//! language = "en"
//! extra_stopwords = []
//!
//! [source]
//! fetch_timeout_secs = 30
//! # user_agent defaults to "text-analyzer/<crate version>"
//! ```

use crate::errors::{AnalyzerError, Result};
use crate::graph::builder::DEFAULT_SIMILARITY_THRESHOLD;
use crate::nlp::frequency::DEFAULT_TOP_K;
use crate::pagerank::lexrank::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub summary: SummaryConfig,
    pub ranking: RankingConfig,
    pub evaluation: EvaluationConfig,
    pub frequency: FrequencyConfig,
    pub source: SourceConfig,
}

/// Summary length and eligibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Sentences per summary when the request doesn't say
    pub default_sentences: usize,
    /// Largest sentence count a request may ask for
    pub max_sentences: usize,
    /// Documents with more words than this are rejected
    pub word_limit: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_sentences: 5,
            max_sentences: 20,
            word_limit: 1000,
        }
    }
}

/// Similarity graph and centrality parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Sentence pairs less similar than this get no edge
    pub similarity_threshold: f64,
    /// Drop stopwords from the ranking vectors (off: rank on raw terms)
    pub filter_stopwords: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            filter_stopwords: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// ROUGE-L F-measure beta (1.0 = harmonic mean)
    pub lcs_beta: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { lcs_beta: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    pub top_k: usize,
    /// Stopword list language
    pub language: String,
    /// Extra stopwords on top of the language list
    pub extra_stopwords: Vec<String>,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

/// Upstream document and URL handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            user_agent: format!("text-analyzer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let r = &self.ranking;
        if !(r.damping > 0.0 && r.damping < 1.0) {
            return Err(AnalyzerError::invalid_config(format!(
                "damping must be between 0 and 1 (exclusive), got {}",
                r.damping
            )));
        }
        if !(r.tolerance > 0.0) {
            return Err(AnalyzerError::invalid_config("tolerance must be > 0"));
        }
        if r.max_iterations == 0 {
            return Err(AnalyzerError::invalid_config("max_iterations must be > 0"));
        }
        if !(0.0..1.0).contains(&r.similarity_threshold) {
            return Err(AnalyzerError::invalid_config(format!(
                "similarity_threshold must be in [0, 1), got {}",
                r.similarity_threshold
            )));
        }

        let s = &self.summary;
        if s.max_sentences == 0 {
            return Err(AnalyzerError::invalid_config("max_sentences must be > 0"));
        }
        if s.default_sentences == 0 || s.default_sentences > s.max_sentences {
            return Err(AnalyzerError::invalid_config(format!(
                "default_sentences must be between 1 and {}, got {}",
                s.max_sentences, s.default_sentences
            )));
        }
        if s.word_limit == 0 {
            return Err(AnalyzerError::invalid_config("word_limit must be > 0"));
        }

        if self.frequency.top_k == 0 {
            return Err(AnalyzerError::invalid_config("top_k must be > 0"));
        }
        if !(self.evaluation.lcs_beta > 0.0) {
            return Err(AnalyzerError::invalid_config("lcs_beta must be > 0"));
        }
        if self.source.fetch_timeout_secs == 0 {
            return Err(AnalyzerError::invalid_config("fetch_timeout_secs must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.ranking.damping = damping;
        self
    }

    /// Builder method: set the similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.ranking.similarity_threshold = threshold;
        self
    }

    /// Builder method: rank on stopword-filtered terms
    pub fn with_ranking_stopwords_filtered(mut self, filter: bool) -> Self {
        self.ranking.filter_stopwords = filter;
        self
    }

    /// Builder method: set the word limit
    pub fn with_word_limit(mut self, limit: usize) -> Self {
        self.summary.word_limit = limit;
        self
    }

    /// Builder method: set top-K for term frequencies
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.frequency.top_k = top_k;
        self
    }

    /// Builder method: set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.frequency.language = language.into();
        self
    }
}

/// Parse and validate a TOML configuration string
pub fn parse_config(toml_str: &str) -> Result<AnalyzerConfig> {
    let config: AnalyzerConfig = toml::from_str(toml_str)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a TOML configuration file
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
