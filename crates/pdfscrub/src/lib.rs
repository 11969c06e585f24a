//! pdfscrub: locate rendered text in PDF documents and redact sensitive
//! strings, images and drawn codes.
//!
//! This is the public API facade crate. It re-exports types from
//! pdfscrub-core and uses pdfscrub-parse for reading, interpretation and
//! content editing.
//!
//! # Architecture
//!
//! - **pdfscrub-core**: Backend-independent data types (matrices, runs, warnings, options)
//! - **pdfscrub-parse**: Document reading, content stream interpretation, fonts and form inlining
//! - **pdfscrub** (this crate): Public API that ties everything together
//!
//! # Example
//!
//! ```no_run
//! let bytes = std::fs::read("statement.pdf")?;
//! for page in pdfscrub::extract_text(&bytes)? {
//!     for run in &page.runs {
//!         println!("{} {:?}", run.text, run.global_bbox);
//!     }
//! }
//! let redacted = pdfscrub::redact(&bytes, &["4111 1111 1111 1111"])?;
//! std::fs::write("statement.redacted.pdf", redacted)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod pdf;
mod redact;

pub use pdf::Pdf;
pub use redact::Redacted;

pub use pdfscrub_core;
pub use pdfscrub_core::{
    BBox, ExtractOptions, ExtractResult, ExtractWarning, ExtractWarningCode, Matrix, PageText,
    PdfError, RedactOptions, TextChunk, TextRun, TranslationMethod,
};
pub use pdfscrub_parse;

/// Extract the text runs of every page with default options.
///
/// # Errors
///
/// Returns [`PdfError`] if the bytes cannot be parsed as a PDF.
pub fn extract_text(bytes: &[u8]) -> Result<Vec<PageText>, PdfError> {
    Ok(Pdf::open(bytes, None)?.extract_text())
}

/// Redact `terms` with default options and return the new document.
///
/// # Errors
///
/// Returns [`PdfError`] if the bytes cannot be parsed or the result cannot
/// be written.
pub fn redact<S: AsRef<str>>(bytes: &[u8], terms: &[S]) -> Result<Vec<u8>, PdfError> {
    Ok(redact_with_options(bytes, terms, &RedactOptions::default())?
        .value
        .bytes)
}

/// Redact `terms` and report what was cleared along with the warnings
/// raised.
///
/// A document in which nothing had to change is returned byte for byte, so
/// redacting an already redacted document is a no-op.
///
/// # Errors
///
/// Returns [`PdfError`] if the bytes cannot be parsed or the result cannot
/// be written.
pub fn redact_with_options<S: AsRef<str>>(
    bytes: &[u8],
    terms: &[S],
    options: &RedactOptions,
) -> Result<ExtractResult<Redacted>, PdfError> {
    let pdf = Pdf::open(bytes, Some(options.extract.clone()))?;
    let mut result = pdf.redact(terms, options)?;
    if result.value.is_unchanged() {
        result.value.bytes = bytes.to_vec();
    }
    Ok(result)
}
