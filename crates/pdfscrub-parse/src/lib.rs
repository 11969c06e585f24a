//! pdfscrub-parse: PDF reading, content stream interpretation and text
//! placement extraction.
//!
//! This crate implements the document reader (via lopdf), the content
//! stream interpreter and its graphics/text state machine, font decoding,
//! and the extraction pipeline that turns every page into flattened
//! [`TextRun`](pdfscrub_core::TextRun)s. It also provides the content-stream
//! text editor used by redaction. It depends on pdfscrub-core for shared
//! data types.

pub mod cid_font;
pub mod cmap;
pub mod collector;
pub mod content_edit;
pub mod dimensions;
pub mod error;
pub mod extraction;
pub mod font_decoder;
pub mod font_metrics;
pub mod form_resolver;
pub mod graphics_state;
pub mod handler;
pub mod interpreter;
pub mod lopdf_backend;
pub mod resources;
pub mod standard_fonts;
pub mod text_state;
pub mod tokenizer;

pub use collector::{FormInvocation, Placement, PlacementCollector, TextItem};
pub use content_edit::ContentEncoding;
pub use error::BackendError;
pub use extraction::extract_document;
pub use font_decoder::{FontCache, FontDecoder};
pub use form_resolver::{FormResolver, Segment};
pub use handler::OperatorHandler;
pub use interpreter::interpret;
pub use lopdf_backend::LopdfDocument;
pub use pdfscrub_core;
