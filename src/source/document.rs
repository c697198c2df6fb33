//! Uploaded document formats and text extraction
//!
//! The format is taken from the declared MIME type when it is one we know,
//! otherwise from the file extension. Unknown formats are rejected, never
//! read as text.

use crate::errors::{AnalyzerError, Result};
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use std::path::Path;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

/// Upper bound on the decompressed size of `word/document.xml`
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Document formats text can be extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Resolve a format from a MIME type (parameters such as `charset` are
    /// ignored), falling back to the extension of `file_name`
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Result<Self> {
        if let Some(format) = content_type.and_then(Self::from_mime) {
            return Ok(format);
        }
        if let Some(format) = Self::from_extension(file_name) {
            return Ok(format);
        }
        Err(AnalyzerError::UnsupportedFormat(match content_type {
            Some(ct) if !ct.trim().is_empty() => format!("{} ({})", file_name, ct.trim()),
            _ => file_name.to_string(),
        }))
    }

    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            MIME_PDF => Some(Self::Pdf),
            MIME_DOCX => Some(Self::Docx),
            MIME_TEXT => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn from_extension(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => MIME_PDF,
            Self::Docx => MIME_DOCX,
            Self::PlainText => MIME_TEXT,
        }
    }

    /// Extract plain UTF-8 text from document bytes
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Pdf => extract_pdf(bytes),
            Self::Docx => extract_docx(bytes),
            Self::PlainText => String::from_utf8(bytes.to_vec())
                .map_err(|e| AnalyzerError::extraction(format!("text file is not UTF-8: {}", e))),
        }
    }
}

/// A file handed to the analyzer by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type declared by the uploader, if any
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    /// Read a file from disk; the format is resolved from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, None, bytes))
    }

    pub fn format(&self) -> Result<DocumentFormat> {
        DocumentFormat::detect(self.content_type.as_deref(), &self.name)
    }

    /// Detect the format and extract the text
    pub fn extract_text(&self) -> Result<String> {
        let format = self.format()?;
        tracing::debug!(
            file = %self.name,
            format = ?format,
            bytes = self.bytes.len(),
            "extracting uploaded document"
        );
        format.extract_text(&self.bytes)
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AnalyzerError::extraction(format!("PDF: {}", e)))
}

fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let entry = archive.by_name("word/document.xml").map_err(docx_error)?;
    let mut doc_xml = Vec::new();
    entry
        .take(MAX_XML_ENTRY_BYTES)
        .read_to_end(&mut doc_xml)
        .map_err(docx_error)?;
    if doc_xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err(docx_error("word/document.xml exceeds size limit"));
    }
    extract_paragraph_text(&doc_xml)
}

fn docx_error(e: impl std::fmt::Display) -> AnalyzerError {
    AnalyzerError::extraction(format!("DOCX: {}", e))
}

/// Concatenate `w:t` runs, one line per `w:p` paragraph
fn extract_paragraph_text(xml: &[u8]) -> Result<String> {
    let mut out = String::new();
    let mut reader = quick_xml::Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut in_run_text = false;
    loop {
        match reader.read_event_into(&mut buf).map_err(docx_error)? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" => out.push('\n'),
                _ => {}
            },
            Event::Text(te) if in_run_text => {
                out.push_str(&te.unescape().map_err(docx_error)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(out.trim_end().to_string())
}
