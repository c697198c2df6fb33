//! Input sources: uploaded documents and web articles

pub mod article;
pub mod document;

pub use article::{validate_url, ArticleFetcher, HttpArticleFetcher, OfflineFetcher};
pub use document::{DocumentFormat, UploadedFile};
