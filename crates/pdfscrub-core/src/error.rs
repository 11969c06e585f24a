//! Error, warning, and option types for pdfscrub.
//!
//! Provides [`PdfError`] for fatal errors that stop processing,
//! [`ExtractWarning`] for non-fatal issues that allow best-effort continuation,
//! [`ExtractResult`] for pairing a value with collected warnings, and
//! [`ExtractOptions`] / [`RedactOptions`] for configuring limits and behavior.

use std::fmt;

/// Fatal error types for PDF processing.
///
/// These errors indicate conditions that prevent processing the document
/// at all. Per-page failures are reported as warnings instead.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading or writing PDF data.
    IoError(String),
    /// The PDF is encrypted and cannot be processed.
    PasswordRequired,
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::ParseError(msg) => write!(f, "parse error: {msg}"),
            PdfError::IoError(msg) => write!(f, "I/O error: {msg}"),
            PdfError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            PdfError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            PdfError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PdfError {}

impl From<std::io::Error> for PdfError {
    fn from(err: std::io::Error) -> Self {
        PdfError::IoError(err.to_string())
    }
}

/// Machine-readable category of a non-fatal extraction or redaction issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// A page or form content stream could not be tokenized; its runs were dropped.
    MalformedStream,
    /// A font, form, or graphics state name was not found in the resources.
    MissingResource,
    /// No Unicode map or encoding table was found; bytes were decoded as code points.
    UnsupportedFontEncoding,
    /// Image resources of a page could not be enumerated for stripping.
    ImageStripSkipped,
    /// A configured limit was reached (form nesting, stream size, page count).
    ResourceLimitReached,
    /// A run matched a redaction term but no content stream showing it
    /// could be edited; its text is still in the document.
    RedactionIncomplete,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::MalformedStream => "MALFORMED_STREAM",
            ExtractWarningCode::MissingResource => "MISSING_RESOURCE",
            ExtractWarningCode::UnsupportedFontEncoding => "UNSUPPORTED_FONT_ENCODING",
            ExtractWarningCode::ImageStripSkipped => "IMAGE_STRIP_SKIPPED",
            ExtractWarningCode::ResourceLimitReached => "RESOURCE_LIMIT_REACHED",
            ExtractWarningCode::RedactionIncomplete => "REDACTION_INCOMPLETE",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered during extraction or redaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page number where the warning occurred (0-indexed), if applicable.
    pub page: Option<usize>,
    /// Index of the operator in the content stream, if applicable.
    pub operator_index: Option<usize>,
    /// Resource name (font, form, graphics state) involved, if applicable.
    pub resource_name: Option<String>,
}

impl ExtractWarning {
    /// Create a warning with a specific code and description.
    pub fn new(code: ExtractWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            operator_index: None,
            resource_name: None,
        }
    }

    /// Attach a page index (builder pattern).
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach operator and resource context (builder pattern).
    pub fn at_operator(mut self, operator_index: usize, resource_name: impl Into<String>) -> Self {
        self.operator_index = Some(operator_index);
        self.resource_name = Some(resource_name.into());
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref name) = self.resource_name {
            write!(f, " [resource {name}]")?;
        }
        if let Some(index) = self.operator_index {
            write!(f, " [operator #{index}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
///
/// Used when extraction can partially succeed with non-fatal issues.
#[derive(Debug, Clone)]
pub struct ExtractResult<T> {
    /// The extracted value.
    pub value: T,
    /// Warnings collected during extraction.
    pub warnings: Vec<ExtractWarning>,
}

impl<T> ExtractResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<ExtractWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExtractResult<U> {
        ExtractResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Options controlling extraction behavior and resource limits.
///
/// Resource limits keep pathological documents from consuming excessive
/// memory or recursing without bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Maximum nesting depth of Form XObjects resolved into a page (default: 10).
    pub max_recursion_depth: usize,
    /// Maximum decoded content bytes interpreted per page or form (default: 100 MB).
    pub max_stream_bytes: usize,
    /// Whether to collect warnings during extraction (default: true).
    pub collect_warnings: bool,
    /// Maximum input PDF size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Maximum number of pages to process (default: None = no limit).
    pub max_pages: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: 10,
            max_stream_bytes: 100 * 1024 * 1024,
            collect_warnings: true,
            max_input_bytes: None,
            max_pages: None,
        }
    }
}

/// Options controlling redaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactOptions {
    /// Replace every image XObject on each page with an empty stream (default: true).
    pub strip_images: bool,
    /// When a page has no image XObject, strip vector groups that look like
    /// drawn codes (default: true). Best effort only.
    pub strip_vector_marks: bool,
    /// Options for the extraction pass that locates the runs to remove.
    pub extract: ExtractOptions,
}

impl Default for RedactOptions {
    fn default() -> Self {
        Self {
            strip_images: true,
            strip_vector_marks: true,
            extract: ExtractOptions::default(),
        }
    }
}
