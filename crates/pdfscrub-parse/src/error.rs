//! Error types for the reader, interpreter and font layers.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`BackendError`]
//! converts into [`PdfError`] at the public API boundary.

use pdfscrub_core::PdfError;
use thiserror::Error;

/// Error type for document reading and content interpretation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading or writing PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error resolving font or encoding information.
    #[error("font error: {0}")]
    Font(String),

    /// A content stream could not be tokenized.
    #[error("malformed content stream: {0}")]
    MalformedStream(String),

    /// A named resource is absent from the resolved resource table.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] PdfError),
}

impl From<lopdf::Error> for BackendError {
    fn from(err: lopdf::Error) -> Self {
        BackendError::Parse(err.to_string())
    }
}

impl From<BackendError> for PdfError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Io(e) => PdfError::IoError(e.to_string()),
            BackendError::Core(e) => e,
            BackendError::Parse(msg) => PdfError::ParseError(msg),
            other => PdfError::ParseError(other.to_string()),
        }
    }
}
