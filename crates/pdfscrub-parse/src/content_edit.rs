//! Content stream editing for redaction.
//!
//! The stream is tokenized and each text-showing operator is compared with
//! the runs to remove. A matching operator keeps its place and keyword but
//! its string operand is emptied: `(...)` and `<...>` become `()`, a `TJ`
//! array becomes `[]`. Bytes outside those operands are never touched.

use std::borrow::Cow;
use std::ops::Range;

use encoding_rs::{UTF_8, WINDOWS_1252};
use pdfscrub_core::TextRun;
use tracing::debug;

use crate::error::BackendError;
use crate::tokenizer::{Lexer, Operand, Operator};

/// `re` operators a group needs before it is taken for a drawn code.
pub const VECTOR_MARK_MIN_RECTS: usize = 64;

/// Operators allowed inside a vector-mark group: path construction,
/// painting, clipping, colour, `cm` and `w`.
const VECTOR_OPERATORS: &[&str] = &[
    "m", "l", "c", "v", "y", "h", "re", "S", "s", "f", "F", "f*", "B", "B*", "b", "b*", "n", "W",
    "W*", "g", "G", "rg", "RG", "k", "K", "cs", "CS", "sc", "SC", "scn", "SCN", "cm", "w",
];

/// Text encoding of a content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Utf8,
    /// Single-byte and transparent for every byte value.
    Windows1252,
}

impl ContentEncoding {
    /// UTF-8 when the bytes are valid UTF-8 and not plain ASCII,
    /// otherwise windows-1252.
    pub fn detect(bytes: &[u8]) -> Self {
        if !bytes.is_ascii() && std::str::from_utf8(bytes).is_ok() {
            ContentEncoding::Utf8
        } else {
            ContentEncoding::Windows1252
        }
    }

    pub fn decode<'a>(self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            ContentEncoding::Utf8 => UTF_8.decode_without_bom_handling(bytes).0,
            ContentEncoding::Windows1252 => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        }
    }
}

/// Source forms of `run` that identify its operand in content: the octal
/// string form and the hex form in both cases.
pub fn source_forms(run: &TextRun) -> Vec<String> {
    if run.bytes.is_empty() {
        return Vec::new();
    }
    let hex = run.hex_form();
    let upper = hex.to_uppercase();
    vec![run.octal_form(), hex, upper]
}

/// The text a showing operator puts on the page, and where its operand is.
struct Shown {
    /// `(...)`, `<...>` or, for `TJ`, `[...]`.
    operand: Range<usize>,
    is_array: bool,
    bytes: Vec<u8>,
}

impl Shown {
    fn of(op: &Operator) -> Option<Self> {
        let (operand, span) = op.operands.last().zip(op.operand_spans.last())?;
        match (op.name.as_str(), operand) {
            ("Tj" | "'" | "\"", Operand::LiteralString(b) | Operand::HexString(b)) => Some(Shown {
                operand: span.clone(),
                is_array: false,
                bytes: b.clone(),
            }),
            ("TJ", Operand::Array(items)) => Some(Shown {
                operand: span.clone(),
                is_array: true,
                bytes: items
                    .iter()
                    .filter_map(Operand::as_string_bytes)
                    .flatten()
                    .copied()
                    .collect(),
            }),
            _ => None,
        }
    }

    /// Whether this operand shows `run`: the same bytes, the run's decoded
    /// text written literally, or one of its [`source_forms`].
    fn shows(&self, run: &TextRun, source: &str, encoding: ContentEncoding) -> bool {
        if !run.bytes.is_empty() && self.bytes == run.bytes {
            return true;
        }
        if !run.text.is_empty() && encoding.decode(&self.bytes) == run.text.as_str() {
            return true;
        }
        let source = if self.is_array {
            source
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .unwrap_or(source)
                .trim()
        } else {
            source
        };
        source_forms(run).iter().any(|form| form == source)
    }
}

/// Outcome of [`redact_runs`] on one content stream.
#[derive(Debug, Default)]
pub struct ContentRedaction {
    /// The edited stream, `None` when no operand was emptied.
    pub content: Option<Vec<u8>>,
    /// Per run, the number of showing operators emptied for it.
    pub hits: Vec<usize>,
    /// Set when tokenizing stopped early; operators past that point were
    /// left as they are.
    pub error: Option<BackendError>,
}

/// Empty the operand of every showing operator in `content` that shows
/// one of `runs`.
pub fn redact_runs(content: &[u8], runs: &[&TextRun]) -> ContentRedaction {
    let encoding = ContentEncoding::detect(content);
    let mut result = ContentRedaction {
        hits: vec![0; runs.len()],
        ..ContentRedaction::default()
    };
    let mut edits: Vec<(Range<usize>, &'static [u8])> = Vec::new();

    for op in Lexer::new(content) {
        let op = match op {
            Ok(op) => op,
            Err(e) => {
                debug!(error = %e, "text redaction scan stopped");
                result.error = Some(e);
                break;
            }
        };
        let Some(shown) = Shown::of(&op) else {
            continue;
        };
        let source = encoding.decode(&content[shown.operand.clone()]);
        let mut matched = false;
        for (hits, run) in result.hits.iter_mut().zip(runs) {
            if shown.shows(run, &source, encoding) {
                *hits += 1;
                matched = true;
            }
        }
        if matched {
            let blank: &'static [u8] = if shown.is_array { b"[]" } else { b"()" };
            edits.push((shown.operand, blank));
        }
    }

    if edits.is_empty() {
        return result;
    }
    let mut out = Vec::with_capacity(content.len());
    let mut copied = 0;
    for (range, blank) in edits {
        out.extend_from_slice(&content[copied..range.start]);
        out.extend_from_slice(blank);
        copied = range.end;
    }
    out.extend_from_slice(&content[copied..]);
    result.content = Some(out);
    result
}

struct Group {
    start: usize,
    vector_only: bool,
    rects: usize,
}

/// Byte ranges of `q ... Q` groups that look like drawn codes: only
/// [`VECTOR_OPERATORS`] inside, at least [`VECTOR_MARK_MIN_RECTS`] `re`.
///
/// Nested groups count towards their parent. Only outermost matches are
/// returned. Content that does not tokenize yields no ranges.
pub fn vector_mark_ranges(content: &[u8]) -> Vec<Range<usize>> {
    let mut stack: Vec<Group> = Vec::new();
    let mut found: Vec<Range<usize>> = Vec::new();

    for op in Lexer::new(content) {
        let op = match op {
            Ok(op) => op,
            Err(e) => {
                debug!(error = %e, "vector-mark scan stopped");
                return Vec::new();
            }
        };
        match op.name.as_str() {
            "q" => stack.push(Group {
                start: op.span.start,
                vector_only: true,
                rects: 0,
            }),
            "Q" => {
                let Some(group) = stack.pop() else {
                    continue;
                };
                if group.vector_only && group.rects >= VECTOR_MARK_MIN_RECTS {
                    found.push(group.start..op.span.end);
                }
                if let Some(parent) = stack.last_mut() {
                    parent.vector_only &= group.vector_only;
                    parent.rects += group.rects;
                }
            }
            name => {
                if let Some(group) = stack.last_mut() {
                    if name == "re" {
                        group.rects += 1;
                    } else if !VECTOR_OPERATORS.contains(&name) {
                        group.vector_only = false;
                    }
                }
            }
        }
    }

    // inner groups are closed first; drop the ones an outer match covers
    found.sort_by_key(|r| (r.start, std::cmp::Reverse(r.end)));
    let mut outer: Vec<Range<usize>> = Vec::new();
    for range in found {
        if outer.last().is_some_and(|last| range.end <= last.end) {
            continue;
        }
        outer.push(range);
    }
    outer
}

/// Remove vector-mark groups from `content`. Returns `None` when none
/// were found.
pub fn strip_vector_marks(content: &[u8]) -> Option<Vec<u8>> {
    let ranges = vector_mark_ranges(content);
    if ranges.is_empty() {
        return None;
    }
    let mut out = Vec::with_capacity(content.len());
    let mut copied = 0;
    for range in &ranges {
        out.extend_from_slice(&content[copied..range.start]);
        copied = range.end;
    }
    out.extend_from_slice(&content[copied..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfscrub_core::{BBox, Matrix, TextChunk, TranslationMethod};

    fn run(text: &str, chunks: Vec<TextChunk>) -> TextRun {
        let bytes = chunks
            .iter()
            .filter_map(TextChunk::as_bytes)
            .flatten()
            .copied()
            .collect();
        TextRun {
            text: text.to_string(),
            chunks,
            bytes,
            matrix: Matrix::IDENTITY,
            local_bbox: BBox::default(),
            global_bbox: BBox::default(),
            translation_method: TranslationMethod::SimpleEncoding,
            displacement: 0.0,
        }
    }

    fn qr_like(rects: usize) -> String {
        let mut s = String::from("q 0 0 0 rg ");
        for i in 0..rects {
            s.push_str(&format!("{i} 0 1 1 re "));
        }
        s.push_str("f Q");
        s
    }

    fn chunked(text: &str, parts: &[&[u8]], adjustment: f64) -> TextRun {
        let mut chunks = Vec::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                chunks.push(TextChunk::Adjustment(adjustment));
            }
            chunks.push(TextChunk::Bytes(part.to_vec()));
        }
        run(text, chunks)
    }

    fn redact(content: &str, runs: &[&TextRun]) -> (String, Vec<usize>) {
        let result = redact_runs(content.as_bytes(), runs);
        assert!(result.error.is_none());
        let edited = result
            .content
            .map(|c| String::from_utf8(c).unwrap())
            .unwrap_or_else(|| content.to_string());
        (edited, result.hits)
    }

    #[test]
    fn detects_encoding() {
        assert_eq!(ContentEncoding::detect(b"BT (abc) Tj ET"), ContentEncoding::Windows1252);
        assert_eq!(ContentEncoding::detect("(caf\u{e9})".as_bytes()), ContentEncoding::Utf8);
        assert_eq!(ContentEncoding::detect(b"(caf\xe9)"), ContentEncoding::Windows1252);
    }

    #[test]
    fn windows_1252_decodes_high_bytes() {
        let enc = ContentEncoding::detect(b"(\x80\xe9)");
        assert_eq!(enc.decode(b"\x80\xe9"), "\u{20ac}\u{e9}");
    }

    #[test]
    fn source_forms_cover_octal_and_hex() {
        let r = run("Hi", vec![TextChunk::Bytes(b"Hi".to_vec())]);
        assert_eq!(source_forms(&r), vec!["(\\110\\151)", "<4869>", "<4869>"]);
        let r = run("\u{ff}", vec![TextChunk::Bytes(vec![0xAB])]);
        assert_eq!(source_forms(&r)[1..], ["<ab>".to_string(), "<AB>".to_string()]);
        assert!(source_forms(&run("", Vec::new())).is_empty());
    }

    #[test]
    fn empties_every_form_and_leaves_other_text() {
        let content = "BT (Secret) Tj (keep) Tj <536563726574> Tj <536563726574> Tj \
                       [(\\123\\145\\143\\162\\145\\164)] TJ ET";
        let r = chunked("Secret", &[b"Secret"], 0.0);
        let (edited, hits) = redact(content, &[&r]);
        assert_eq!(
            edited,
            "BT () Tj (keep) Tj () Tj () Tj \
             [] TJ ET"
        );
        assert_eq!(hits, vec![4]);
    }

    #[test]
    fn integer_kerned_tj_array_is_emptied() {
        let r = chunked("Secret", &[b"Sec", b"ret"], -20.0);
        let (edited, hits) = redact("BT /F1 12 Tf 72 720 Td [(Sec)-20(ret)] TJ ET", &[&r]);
        assert_eq!(edited, "BT /F1 12 Tf 72 720 Td [] TJ ET");
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn escaped_literal_is_emptied() {
        let r = chunked("Smith (acct)", &[b"Smith (acct)"], 0.0);
        let (edited, hits) = redact("BT (Smith \\(acct\\)) Tj (x) Tj ET", &[&r]);
        assert_eq!(edited, "BT () Tj (x) Tj ET");
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn numbers_and_operators_are_never_edited() {
        let r = chunked("12", &[b"12"], 0.0);
        let (edited, hits) =
            redact("BT /F1 12 Tf 100 712 Td (12) Tj 0 -14 Td (Keep) Tj ET", &[&r]);
        assert_eq!(edited, "BT /F1 12 Tf 100 712 Td () Tj 0 -14 Td (Keep) Tj ET");
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn quote_operators_keep_their_spacing_operands() {
        let r = chunked("Name", &[b"Name"], 0.0);
        let (edited, _) = redact("BT (Name) ' 1 2 (Name) \" ET", &[&r]);
        assert_eq!(edited, "BT () ' 1 2 () \" ET");
    }

    #[test]
    fn partial_overlap_is_not_a_match() {
        let r = chunked("Secret", &[b"Secret"], 0.0);
        let (edited, hits) = redact("BT (Secretary) Tj ET", &[&r]);
        assert_eq!(edited, "BT (Secretary) Tj ET");
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn no_match_leaves_content_alone() {
        let r = run("zzz", vec![TextChunk::Bytes(b"zzz".to_vec())]);
        let result = redact_runs(b"BT (a) Tj ET", &[&r]);
        assert!(result.content.is_none());
        assert_eq!(result.hits, vec![0]);
    }

    #[test]
    fn malformed_tail_keeps_earlier_edits() {
        let r = chunked("A", &[b"A"], 0.0);
        let result = redact_runs(b"BT (A) Tj (unterminated", &[&r]);
        assert!(result.error.is_some());
        assert_eq!(result.content.unwrap(), b"BT () Tj (unterminated");
        assert_eq!(result.hits, vec![1]);
    }

    #[test]
    fn vector_group_with_many_rects_is_stripped() {
        let content = format!("BT (x) Tj ET {} q 1 0 0 1 0 0 cm Q", qr_like(64));
        let stripped = strip_vector_marks(content.as_bytes()).unwrap();
        assert_eq!(stripped, b"BT (x) Tj ET  q 1 0 0 1 0 0 cm Q");
    }

    #[test]
    fn small_or_mixed_groups_survive() {
        assert!(strip_vector_marks(qr_like(10).as_bytes()).is_none());
        let mixed = qr_like(64).replace("f Q", "BT (t) Tj ET f Q");
        assert!(strip_vector_marks(mixed.as_bytes()).is_none());
    }

    #[test]
    fn nested_groups_strip_outermost_once() {
        let content = format!("q {} {} Q", qr_like(40), qr_like(40));
        let ranges = vector_mark_ranges(content.as_bytes());
        assert_eq!(ranges, vec![0..content.len()]);
    }

    #[test]
    fn unparseable_content_is_left_alone() {
        assert!(vector_mark_ranges(b"q (unterminated").is_empty());
    }
}
