//! pdfscrub-core: Backend-independent data types for pdfscrub.
//!
//! This crate provides the matrix algebra, the built-in simple-font
//! encodings and glyph list, the text run output types, and the shared
//! error, warning and option types used by the parsing and facade crates.
//! Its only optional dependency is `serde`.

pub mod encoding;
pub mod error;
pub mod geometry;
pub mod glyph_list;
pub mod run;

pub use encoding::{FontEncoding, StandardEncoding};
pub use error::{
    ExtractOptions, ExtractResult, ExtractWarning, ExtractWarningCode, PdfError, RedactOptions,
};
pub use geometry::{BBox, Matrix};
pub use glyph_list::glyph_name_to_unicode;
pub use run::{PageText, TextChunk, TextRun, TranslationMethod};
