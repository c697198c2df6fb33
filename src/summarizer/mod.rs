//! Summarization components
//!
//! Provides extractive summarization by selecting the most central
//! sentences and presenting them in document order.

pub mod selector;
