//! Top-level PDF document type for opening, extracting and redacting.

use pdfscrub_core::{ExtractOptions, ExtractResult, PageText, PdfError, RedactOptions};
use pdfscrub_parse::{LopdfDocument, extract_document};

use crate::redact::{Redacted, redact_document};

/// An opened PDF document.
///
/// Extraction borrows the document; redaction consumes it, since it edits
/// objects in place before serializing.
#[derive(Debug)]
pub struct Pdf {
    doc: LopdfDocument,
    options: ExtractOptions,
}

impl Pdf {
    /// Open a PDF document from a file path.
    ///
    /// Convenience wrapper around [`Pdf::open`] that reads the file into
    /// memory first.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the file cannot be read or is not a valid PDF.
    pub fn open_file(
        path: impl AsRef<std::path::Path>,
        options: Option<ExtractOptions>,
    ) -> Result<Self, PdfError> {
        let bytes = std::fs::read(path.as_ref()).map_err(|e| PdfError::IoError(e.to_string()))?;
        Self::open(&bytes, options)
    }

    /// Open a PDF document from bytes.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Raw PDF file bytes.
    /// * `options` - Extraction options (resource limits, etc.). Uses defaults if `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::ResourceLimitExceeded`] when the input is larger
    /// than `max_input_bytes`, [`PdfError::PasswordRequired`] if the PDF is
    /// encrypted, and [`PdfError::ParseError`] if the bytes are not a PDF.
    pub fn open(bytes: &[u8], options: Option<ExtractOptions>) -> Result<Self, PdfError> {
        let options = options.unwrap_or_default();
        // Check max_input_bytes before parsing
        if let Some(max_bytes) = options.max_input_bytes {
            if bytes.len() > max_bytes {
                return Err(PdfError::ResourceLimitExceeded {
                    limit_name: "max_input_bytes".to_string(),
                    limit_value: max_bytes,
                    actual_value: bytes.len(),
                });
            }
        }
        let doc = LopdfDocument::open(bytes)?;
        Ok(Self { doc, options })
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every page's text runs, discarding warnings.
    pub fn extract_text(&self) -> Vec<PageText> {
        self.extract_text_with_warnings().value
    }

    /// Extract every page's text runs together with the warnings raised on
    /// the way. Pages that fail are empty rather than fatal.
    pub fn extract_text_with_warnings(&self) -> ExtractResult<Vec<PageText>> {
        extract_document(&self.doc, &self.options)
    }

    /// Redact `terms` from the document and serialize the result.
    ///
    /// Text runs are located with the options the document was opened with;
    /// `options.extract` only applies to [`crate::redact_with_options`],
    /// which opens the document itself.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] when a page dictionary cannot be read or the
    /// edited document cannot be written.
    pub fn redact<S: AsRef<str>>(
        mut self,
        terms: &[S],
        options: &RedactOptions,
    ) -> Result<ExtractResult<Redacted>, PdfError> {
        redact_document(&mut self.doc, terms, options, &self.options)
    }
}
