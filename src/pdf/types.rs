//! Value types crossing the PDF engine boundary

use thiserror::Error;

/// Failure modes of the PDF engine
///
/// lopdf signals wrong-password and parse failures through one error enum;
/// splitting them here lets the HTTP layer pattern-match deterministically
/// instead of inspecting error strings.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("not a valid PDF document: {0}")]
    Malformed(String),

    #[error("the supplied password does not unlock this document")]
    InvalidPassword,

    #[error("PDF library failure: {0}")]
    Unsupported(String),
}

/// Result of opening a document without a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    pub encrypted: bool,
    /// `None` whenever reading the page tree would require a password.
    pub page_count: Option<usize>,
}

/// A document with its password protection removed
#[derive(Debug, Clone)]
pub struct UnlockedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// False when the input never carried an encryption dictionary; in that
    /// case `bytes` is the caller's input, untouched.
    pub was_encrypted: bool,
}
