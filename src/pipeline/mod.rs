//! Request handling
//!
//! An [`AnalysisRequest`] goes through the [`QuotaGate`] and then the
//! summarization stages driven by [`Analyzer`].

pub mod quota;
pub mod request;
pub mod runner;

pub use quota::QuotaGate;
pub use request::{AnalysisReport, AnalysisRequest, AnalysisResponse};
pub use runner::Analyzer;
