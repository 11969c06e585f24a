//! Font decoding: encoded bytes to Unicode, and per-glyph advances.
//!
//! One decoder is built per font identity and reused for the whole document.
//! Translation prefers an embedded ToUnicode map, then a simple-font
//! encoding table, and finally treats each byte as its own code point.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use lopdf::{Dictionary, Object};
use pdfscrub_core::{FontEncoding, StandardEncoding, TranslationMethod};
use tracing::debug;

use crate::cid_font::{cid_font_metrics, is_type0_font};
use crate::cmap::CMap;
use crate::font_metrics::{FontDescriptor, FontMetrics, base_font, simple_font_metrics};
use crate::lopdf_backend::{decode_stream, dict_get, object_to_f64, resolve};
use crate::resources::{FontKey, FontRef};

/// Decoded text of one string operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub method: TranslationMethod,
}

/// Where a simple font's encoding table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingSource {
    /// `/Encoding /WinAnsiEncoding` and friends.
    Name,
    /// An encoding dictionary with optional `/BaseEncoding` and `/Differences`.
    Dictionary,
}

/// Decoder for one font.
#[derive(Debug, Clone)]
pub struct FontDecoder {
    composite: bool,
    to_unicode: Option<CMap>,
    encoding: Option<(EncodingSource, FontEncoding)>,
    metrics: FontMetrics,
    base_font: Option<String>,
    unsupported: Option<String>,
}

impl FontDecoder {
    /// Build a decoder from a font dictionary.
    pub fn build(doc: &lopdf::Document, font: &Dictionary) -> Self {
        let composite = is_type0_font(doc, font);
        let base_font = base_font(doc, font);
        let to_unicode = read_to_unicode(doc, font);

        let mut unsupported = None;
        let mut encoding = None;
        if to_unicode.is_none() {
            if composite {
                unsupported = Some("composite font without a ToUnicode map".to_string());
            } else if let Some(enc) = dict_get(doc, font, b"Encoding") {
                match read_simple_encoding(doc, font, enc) {
                    Ok(found) => encoding = Some(found),
                    Err(reason) => unsupported = Some(reason),
                }
            }
        }

        let metrics = if composite {
            cid_font_metrics(doc, font)
        } else {
            simple_font_metrics(doc, font)
        };

        debug!(
            font = base_font.as_deref().unwrap_or("?"),
            composite,
            to_unicode = to_unicode.is_some(),
            encoding = ?encoding.as_ref().map(|(source, _)| *source),
            "built font decoder"
        );

        Self {
            composite,
            to_unicode,
            encoding,
            metrics,
            base_font,
            unsupported,
        }
    }

    /// Decode `bytes` with the best method available.
    pub fn translate(&self, bytes: &[u8]) -> Translation {
        if let Some(cmap) = &self.to_unicode {
            Translation {
                text: cmap.decode(bytes),
                method: TranslationMethod::ToUnicode,
            }
        } else if let Some((_, encoding)) = &self.encoding {
            Translation {
                text: encoding.decode_bytes(bytes),
                method: TranslationMethod::SimpleEncoding,
            }
        } else {
            Translation {
                text: bytes.iter().map(|&b| char::from(b)).collect(),
                method: TranslationMethod::Default,
            }
        }
    }

    /// Visit every glyph in `bytes` with its advance (em units) and code.
    ///
    /// Simple fonts visit one code per byte. Composite fonts segment codes
    /// the way the ToUnicode map does, or in fixed two-byte codes without one.
    pub fn iterate_displacements(&self, bytes: &[u8], mut visit: impl FnMut(f64, u32)) {
        if !self.composite {
            for &b in bytes {
                let code = u32::from(b);
                visit(self.metrics.advance(code), code);
            }
        } else if let Some(cmap) = &self.to_unicode {
            for code in cmap.codes(bytes) {
                visit(self.metrics.advance(code), code);
            }
        } else {
            for pair in bytes.chunks(2) {
                let code = pair.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b));
                visit(self.metrics.advance(code), code);
            }
        }
    }

    /// Ascent in glyph-space units.
    pub fn ascent(&self) -> f64 {
        self.metrics.ascent()
    }

    /// Descent in glyph-space units (usually negative).
    pub fn descent(&self) -> f64 {
        self.metrics.descent()
    }

    pub fn is_composite(&self) -> bool {
        self.composite
    }

    pub fn base_font(&self) -> Option<&str> {
        self.base_font.as_deref()
    }

    pub fn encoding_source(&self) -> Option<EncodingSource> {
        self.encoding.as_ref().map(|(source, _)| *source)
    }

    /// Why translation falls back to raw bytes, when it does for a reason
    /// worth reporting.
    pub fn unsupported_reason(&self) -> Option<&str> {
        self.unsupported.as_deref()
    }

    /// The method [`translate`](Self::translate) uses for every input.
    pub fn method(&self) -> TranslationMethod {
        if self.to_unicode.is_some() {
            TranslationMethod::ToUnicode
        } else if self.encoding.is_some() {
            TranslationMethod::SimpleEncoding
        } else {
            TranslationMethod::Default
        }
    }
}

/// Document-wide decoders keyed by font identity.
#[derive(Debug, Default)]
pub struct FontCache {
    decoders: HashMap<FontKey, FontDecoder>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The decoder for `font`, built on first use.
    ///
    /// The flag is `true` when this call built the decoder. Returns `None`
    /// when the font dictionary cannot be resolved.
    pub fn load(&mut self, doc: &lopdf::Document, font: &FontRef) -> Option<(&FontDecoder, bool)> {
        match self.decoders.entry(font.key) {
            Entry::Occupied(entry) => Some((entry.into_mut(), false)),
            Entry::Vacant(entry) => {
                let dict = font.dictionary(doc)?;
                Some((entry.insert(FontDecoder::build(doc, dict)), true))
            }
        }
    }

    /// An already built decoder.
    pub fn get(&self, font: &FontRef) -> Option<&FontDecoder> {
        self.decoders.get(&font.key)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

fn read_to_unicode(doc: &lopdf::Document, font: &Dictionary) -> Option<CMap> {
    let stream = dict_get(doc, font, b"ToUnicode")?.as_stream().ok()?;
    match decode_stream(stream) {
        Ok(data) => Some(CMap::parse(&data)),
        Err(e) => {
            debug!(error = %e, "unreadable ToUnicode stream");
            None
        }
    }
}

fn read_simple_encoding(
    doc: &lopdf::Document,
    font: &Dictionary,
    encoding: &Object,
) -> Result<(EncodingSource, FontEncoding), String> {
    match encoding {
        Object::Name(name) => StandardEncoding::from_name(name)
            .map(|std| (EncodingSource::Name, FontEncoding::from_standard(std)))
            .ok_or_else(|| format!("unsupported encoding /{}", String::from_utf8_lossy(name))),
        Object::Dictionary(dict) => Ok((EncodingSource::Dictionary, differences_encoding(doc, font, dict))),
        other => Err(format!("unexpected /Encoding value {other:?}")),
    }
}

/// Start from `/BaseEncoding`, else Symbol for symbolic fonts, else
/// Standard; then apply `/Differences`.
fn differences_encoding(doc: &lopdf::Document, font: &Dictionary, dict: &Dictionary) -> FontEncoding {
    let base = dict_get(doc, dict, b"BaseEncoding")
        .and_then(|o| o.as_name().ok())
        .and_then(StandardEncoding::from_name)
        .unwrap_or_else(|| {
            let symbolic = FontDescriptor::read(doc, font).is_some_and(|d| d.is_symbolic());
            if symbolic {
                StandardEncoding::Symbol
            } else {
                StandardEncoding::Standard
            }
        });

    let mut encoding = FontEncoding::from_standard(base);
    if let Some(diffs) = dict_get(doc, dict, b"Differences").and_then(|o| o.as_array().ok()) {
        encoding.apply_differences(parse_differences(doc, diffs));
    }
    encoding
}

/// Flatten a `/Differences` array into (code, glyph name) pairs: a number
/// sets the next code, each following name takes one code.
fn parse_differences(doc: &lopdf::Document, items: &[Object]) -> Vec<(u8, String)> {
    let mut out = Vec::new();
    let mut code: Option<i64> = None;
    for item in items {
        match resolve(doc, item) {
            Object::Name(name) => {
                if let Some(c) = code {
                    if let Ok(byte) = u8::try_from(c) {
                        out.push((byte, String::from_utf8_lossy(name).into_owned()));
                    }
                    code = Some(c + 1);
                }
            }
            other => {
                if let Some(n) = object_to_f64(other) {
                    code = Some(n as i64);
                }
            }
        }
    }
    out
}
