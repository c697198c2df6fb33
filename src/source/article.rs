//! Web article sources
//!
//! URLs are validated before any network access. Fetching sits behind
//! [`ArticleFetcher`] so the request pipeline can run without a network.

use crate::config::SourceConfig;
use crate::errors::{AnalyzerError, Result};
use std::io::Cursor;
use std::time::Duration;
use url::Url;

/// Parse `input` as an absolute http(s) URL with a host
pub fn validate_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| AnalyzerError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AnalyzerError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                trimmed, other
            )))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(AnalyzerError::InvalidUrl(format!("{}: missing host", trimmed)));
    }
    Ok(url)
}

/// Turns a URL into the plain text of the article it points at
pub trait ArticleFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Fetches pages over HTTP and strips boilerplate with `readability`
#[derive(Debug, Clone)]
pub struct HttpArticleFetcher {
    client: reqwest::blocking::Client,
}

impl HttpArticleFetcher {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AnalyzerError::fetch(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ArticleFetcher for HttpArticleFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!(%url, "fetching article");
        let html = self
            .client
            .get(url.as_str())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| AnalyzerError::fetch(format!("{}: {}", url, e)))?;

        let product = readability::extractor::extract(&mut Cursor::new(html.as_bytes()), url)
            .map_err(|e| AnalyzerError::fetch(format!("{}: {}", url, e)))?;

        let text = product.text.trim().to_string();
        if text.is_empty() {
            tracing::warn!(%url, "extracted empty article");
            return Err(AnalyzerError::fetch(format!("{}: no article text found", url)));
        }
        tracing::debug!(%url, title = %product.title, chars = text.len(), "article extracted");
        Ok(text)
    }
}

/// Refuses every fetch; for callers that only analyze local text
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl ArticleFetcher for OfflineFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        Err(AnalyzerError::fetch(format!("{}: network access is disabled", url)))
    }
}
