#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text extraction for transcript dumps.
//!
//! Registrar exports arrive as one multi-page PDF holding many students'
//! unofficial transcripts. This crate turns that PDF into a single flat
//! text blob using pure-Rust text extraction ([`pdf_extract`]) and collapses
//! the column padding the extractor leaves behind, so the line-oriented
//! patterns downstream see one space between tokens.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs of two or more spaces.
static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// Form feed emitted between pages.
const PAGE_BREAK: char = '\u{c}';

/// Reads a PDF from disk and returns all of its text.
///
/// # Errors
///
/// Returns [`PdfError::Io`] if the file cannot be read and
/// [`PdfError::Extraction`] if the bytes are not a readable PDF.
pub fn extract_text(path: &Path) -> Result<String, PdfError> {
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    extract_text_from_mem(&bytes)
}

/// Extracts all text from in-memory PDF bytes.
///
/// Pages are separated by newlines and the result always starts and ends
/// with a newline, so every line (the first and last included) is
/// newline-terminated.
///
/// # Errors
///
/// Returns [`PdfError::Extraction`] if the bytes are not a readable PDF.
pub fn extract_text_from_mem(bytes: &[u8]) -> Result<String, PdfError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    let text = join_pages(&raw);
    log::debug!("Extracted {} characters of text", text.len());
    Ok(text)
}

/// Replaces page breaks with newlines and frames the text in newlines.
#[must_use]
pub fn join_pages(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() + 2);
    text.push('\n');
    text.extend(raw.chars().map(|c| if c == PAGE_BREAK { '\n' } else { c }));
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Collapses every run of spaces into a single space.
///
/// Newlines and other whitespace are left alone.
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    SPACE_RUN_RE.replace_all(text, " ").into_owned()
}
