//! Flattened text runs, the output of extraction and the input of redaction.

use std::fmt::Write as _;

use crate::geometry::{BBox, Matrix};

/// One element of a text-showing operator's operand.
///
/// `Tj`, `'` and `"` show a single string; `TJ` alternates strings with
/// numeric kerning adjustments in thousandths of text space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextChunk {
    /// Raw string bytes, still font-encoded.
    Bytes(Vec<u8>),
    /// Horizontal adjustment. Positive values move left.
    Adjustment(f64),
}

impl TextChunk {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TextChunk::Bytes(b) => Some(b),
            TextChunk::Adjustment(_) => None,
        }
    }
}

/// How a font decoder turned bytes into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TranslationMethod {
    /// The font's embedded ToUnicode CMap.
    ToUnicode,
    /// A simple font's encoding table and the glyph list.
    SimpleEncoding,
    /// Each byte taken as its own code point.
    Default,
}

impl TranslationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMethod::ToUnicode => "toUnicode",
            TranslationMethod::SimpleEncoding => "simpleEncoding",
            TranslationMethod::Default => "default",
        }
    }
}

/// A run of text as it lands on the page, with any form nesting resolved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    /// Decoded Unicode text.
    pub text: String,
    /// Operand chunks exactly as shown.
    pub chunks: Vec<TextChunk>,
    /// All string bytes of `chunks`, concatenated.
    pub bytes: Vec<u8>,
    /// Text space to page space: `Tm × CTM`, composed with any enclosing
    /// form placements.
    pub matrix: Matrix,
    /// Extent in text space, before `matrix`.
    pub local_bbox: BBox,
    /// `local_bbox` mapped through `matrix`.
    pub global_bbox: BBox,
    /// Decoding method of the last string chunk.
    pub translation_method: TranslationMethod,
    /// Total horizontal advance in text space.
    pub displacement: f64,
}

impl TextRun {
    /// Whether the decoded text contains any of `terms`.
    ///
    /// Empty terms never match.
    pub fn contains_any<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        !self.text.is_empty()
            && terms
                .iter()
                .map(AsRef::as_ref)
                .any(|t| !t.is_empty() && self.text.contains(t))
    }

    /// The run's operand written with octal string escapes.
    ///
    /// Each string chunk becomes `(\ooo\ooo...)` and each adjustment is
    /// written with two decimals, with no separators, e.g.
    /// `(\110\151)-120.00(\041)`.
    pub fn octal_form(&self) -> String {
        let mut out = String::new();
        for chunk in &self.chunks {
            match chunk {
                TextChunk::Bytes(bytes) => {
                    out.push('(');
                    for b in bytes {
                        let _ = write!(out, "\\{b:03o}");
                    }
                    out.push(')');
                }
                TextChunk::Adjustment(n) => {
                    let _ = write!(out, "{n:.2}");
                }
            }
        }
        out
    }

    /// `<...>` hex string of `bytes`, lowercase.
    pub fn hex_form(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len() * 2 + 2);
        out.push('<');
        for b in &self.bytes {
            let _ = write!(out, "{b:02x}");
        }
        out.push('>');
        out
    }
}

/// Runs of one page, in content-stream order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageText {
    /// 0-based page index.
    pub page_index: usize,
    pub runs: Vec<TextRun>,
}

impl PageText {
    pub fn new(page_index: usize, runs: Vec<TextRun>) -> Self {
        Self { page_index, runs }
    }

    /// Run texts joined with newlines.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
