//! Natural Language Processing components
//!
//! Tokenization, stopword filtering, the filtered term stream, and term
//! frequency counting.

pub mod frequency;
pub mod preprocess;
pub mod stopwords;
pub mod tokenizer;
