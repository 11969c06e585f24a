//! Glyph widths and vertical metrics for text bounding boxes.
//!
//! All values are in glyph-space units (1/1000 em); callers scale by font
//! size and horizontal scaling at use time.

use std::collections::HashMap;

use lopdf::Dictionary;

use crate::lopdf_backend::{dict_get, object_to_f64, resolve};
use crate::standard_fonts;

/// Bit 3 of the font descriptor `/Flags`: the font uses a symbolic charset.
pub const SYMBOLIC_FLAG: i64 = 1 << 2;

/// Widths keyed by character code plus the font's vertical extent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMetrics {
    widths: HashMap<u32, f64>,
    default_width: f64,
    ascent: f64,
    descent: f64,
}

impl FontMetrics {
    pub fn new(widths: HashMap<u32, f64>, default_width: f64, ascent: f64, descent: f64) -> Self {
        Self {
            widths,
            default_width,
            ascent,
            descent,
        }
    }

    /// Advance of `code` in em units (glyph-space width / 1000).
    ///
    /// A width of zero counts as absent and falls through to the default.
    pub fn advance(&self, code: u32) -> f64 {
        let width = match self.widths.get(&code) {
            Some(w) if *w != 0.0 => *w,
            _ => self.default_width,
        };
        width / 1000.0
    }

    pub fn ascent(&self) -> f64 {
        self.ascent
    }

    pub fn descent(&self) -> f64 {
        self.descent
    }

    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// The descriptor values both font kinds read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontDescriptor {
    pub ascent: Option<f64>,
    pub descent: Option<f64>,
    pub missing_width: Option<f64>,
    pub flags: i64,
}

impl FontDescriptor {
    /// Read `/FontDescriptor` from `font`, if present.
    pub fn read(doc: &lopdf::Document, font: &Dictionary) -> Option<Self> {
        let desc = dict_get(doc, font, b"FontDescriptor")?.as_dict().ok()?;
        let number = |key: &[u8]| dict_get(doc, desc, key).and_then(object_to_f64);
        Some(Self {
            ascent: number(b"Ascent"),
            descent: number(b"Descent"),
            missing_width: number(b"MissingWidth"),
            flags: dict_get(doc, desc, b"Flags")
                .and_then(|o| o.as_i64().ok())
                .unwrap_or(0),
        })
    }

    pub fn is_symbolic(&self) -> bool {
        self.flags & SYMBOLIC_FLAG != 0
    }
}

/// Metrics for a simple (single-byte) font.
///
/// Widths come from `/FirstChar`, `/LastChar` and `/Widths` when all three
/// are present, otherwise from the standard-14 tables by `/BaseFont`. A font
/// descriptor then supplies ascent, descent and the default (missing) width.
pub fn simple_font_metrics(doc: &lopdf::Document, font: &Dictionary) -> FontMetrics {
    let mut metrics = FontMetrics::default();

    let first_char = dict_get(doc, font, b"FirstChar").and_then(object_to_f64);
    let last_char = dict_get(doc, font, b"LastChar").and_then(object_to_f64);
    let widths = dict_get(doc, font, b"Widths").and_then(|o| o.as_array().ok());

    if let (Some(first), Some(last), Some(widths)) = (first_char, last_char, widths) {
        let first = first.max(0.0) as u32;
        let last = last.max(0.0) as u32;
        for (code, width) in (first..=last).zip(widths) {
            if let Some(w) = object_to_f64(resolve(doc, width)) {
                metrics.widths.insert(code, w);
            }
        }
    } else if let Some(data) = base_font(doc, font).and_then(|name| standard_fonts::lookup(&name)) {
        for code in 0..=255u8 {
            if let Some(w) = data.width(code) {
                metrics.widths.insert(u32::from(code), w);
            }
        }
        metrics.ascent = f64::from(data.ascent);
        metrics.descent = f64::from(data.descent);
    }

    if let Some(desc) = FontDescriptor::read(doc, font) {
        apply_descriptor(&mut metrics, &desc);
        metrics.default_width = desc.missing_width.unwrap_or(0.0);
    }
    metrics
}

/// Override ascent and descent with descriptor values that are present.
pub(crate) fn apply_descriptor(metrics: &mut FontMetrics, desc: &FontDescriptor) {
    if let Some(ascent) = desc.ascent {
        metrics.ascent = ascent;
    }
    if let Some(descent) = desc.descent {
        metrics.descent = descent;
    }
}

/// The `/BaseFont` name as a string.
pub fn base_font(doc: &lopdf::Document, font: &Dictionary) -> Option<String> {
    dict_get(doc, font, b"BaseFont")
        .and_then(|o| o.as_name().ok())
        .map(|n| String::from_utf8_lossy(n).into_owned())
}
