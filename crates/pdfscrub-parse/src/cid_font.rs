//! Composite (Type0) font metrics.
//!
//! A Type0 font carries its widths on the first entry of
//! `/DescendantFonts`: a default width `/DW` (1000 when absent) and a `/W`
//! array of runs.

use std::collections::HashMap;

use lopdf::{Dictionary, Object};

use crate::font_metrics::{FontDescriptor, FontMetrics, apply_descriptor};
use crate::lopdf_backend::{dict_get, object_to_f64, resolve};

/// Default width of a CIDFont without `/DW`.
const DEFAULT_CID_WIDTH: f64 = 1000.0;
/// Widest `c_first c_last w` run expanded.
const MAX_RUN_SPAN: u32 = 0xFFFF;

/// Whether `font` is a composite font.
pub fn is_type0_font(doc: &lopdf::Document, font: &Dictionary) -> bool {
    dict_get(doc, font, b"Subtype")
        .and_then(|o| o.as_name().ok())
        .is_some_and(|n| n == b"Type0")
}

/// The first descendant CIDFont dictionary of a Type0 font.
pub fn descendant_font<'a>(doc: &'a lopdf::Document, type0: &'a Dictionary) -> Option<&'a Dictionary> {
    let descendants = dict_get(doc, type0, b"DescendantFonts")?.as_array().ok()?;
    resolve(doc, descendants.first()?).as_dict().ok()
}

/// Metrics for a Type0 font, read from its descendant.
pub fn cid_font_metrics(doc: &lopdf::Document, type0: &Dictionary) -> FontMetrics {
    let Some(cid_font) = descendant_font(doc, type0) else {
        return FontMetrics::new(HashMap::new(), DEFAULT_CID_WIDTH, 0.0, 0.0);
    };
    let default_width = dict_get(doc, cid_font, b"DW")
        .and_then(object_to_f64)
        .unwrap_or(DEFAULT_CID_WIDTH);
    let widths = dict_get(doc, cid_font, b"W")
        .and_then(|o| o.as_array().ok())
        .map(|arr| parse_w_array(arr, doc))
        .unwrap_or_default();

    let mut metrics = FontMetrics::new(widths, default_width, 0.0, 0.0);
    if let Some(desc) = FontDescriptor::read(doc, cid_font) {
        apply_descriptor(&mut metrics, &desc);
    }
    metrics
}

/// Parse a CIDFont `/W` array.
///
/// ```text
/// [ c [w1 w2 ...] c_first c_last w ... ]
/// ```
/// `c [w1 w2 ...]` assigns w1, w2, ... to codes c, c+1, ...;
/// `c_first c_last w` assigns w to every code in the range.
pub fn parse_w_array(objects: &[Object], doc: &lopdf::Document) -> HashMap<u32, f64> {
    let mut widths = HashMap::new();
    let mut i = 0;

    while i < objects.len() {
        let Some(start) = object_to_u32(resolve(doc, &objects[i])) else {
            i += 1;
            continue;
        };
        i += 1;
        let Some(next) = objects.get(i).map(|o| resolve(doc, o)) else {
            break;
        };

        if let Ok(arr) = next.as_array() {
            for (code, obj) in (start..).zip(arr) {
                if let Some(w) = object_to_f64(resolve(doc, obj)) {
                    widths.insert(code, w);
                }
            }
            i += 1;
        } else if let Some(end) = object_to_u32(next) {
            i += 1;
            if let Some(w) = objects.get(i).and_then(|o| object_to_f64(resolve(doc, o))) {
                let end = end.min(start.saturating_add(MAX_RUN_SPAN));
                for code in start..=end {
                    widths.insert(code, w);
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }

    widths
}

fn object_to_u32(obj: &Object) -> Option<u32> {
    object_to_f64(obj).filter(|v| *v >= 0.0).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Document, dictionary};

    #[test]
    fn parse_w_array_individual_widths() {
        // [1 [500 600 700]] → CID 1=500, CID 2=600, CID 3=700
        let doc = Document::with_version("1.5");
        let objects = vec![
            Object::Integer(1),
            Object::Array(vec![
                Object::Integer(500),
                Object::Integer(600),
                Object::Integer(700),
            ]),
        ];
        let widths = parse_w_array(&objects, &doc);
        assert_eq!(widths.get(&1), Some(&500.0));
        assert_eq!(widths.get(&3), Some(&700.0));
        assert_eq!(widths.get(&4), None);
    }

    #[test]
    fn parse_w_array_range_format() {
        let doc = Document::with_version("1.5");
        let objects = vec![Object::Integer(10), Object::Integer(20), Object::Integer(500)];
        let widths = parse_w_array(&objects, &doc);
        for cid in 10..=20 {
            assert_eq!(widths.get(&cid), Some(&500.0), "CID {cid}");
        }
        assert_eq!(widths.get(&21), None);
    }

    #[test]
    fn parse_w_array_mixed_formats() {
        let doc = Document::with_version("1.5");
        let objects = vec![
            Object::Integer(1),
            Object::Array(vec![Object::Integer(250), Object::Real(300.0)]),
            Object::Integer(10),
            Object::Integer(20),
            Object::Integer(500),
        ];
        let widths = parse_w_array(&objects, &doc);
        assert_eq!(widths.get(&2), Some(&300.0));
        assert_eq!(widths.get(&15), Some(&500.0));
    }

    #[test]
    fn parse_w_array_huge_run_is_capped() {
        let doc = Document::with_version("1.5");
        let objects = vec![Object::Integer(0), Object::Integer(i64::from(u32::MAX)), Object::Integer(1)];
        let widths = parse_w_array(&objects, &doc);
        assert_eq!(widths.len(), MAX_RUN_SPAN as usize + 1);
    }

    #[test]
    fn parse_w_array_truncated() {
        let doc = Document::with_version("1.5");
        assert!(parse_w_array(&[Object::Integer(5)], &doc).is_empty());
        assert!(parse_w_array(&[], &doc).is_empty());
    }

    #[test]
    fn type0_metrics_from_descendant() {
        let mut doc = Document::with_version("1.5");
        let desc = doc.add_object(dictionary! { "Ascent" => 880, "Descent" => -120 });
        let cid_font = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "DW" => 500,
            "W" => vec![Object::Integer(3), Object::Array(vec![Object::Integer(250)])],
            "FontDescriptor" => desc,
        });
        let type0 = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "DescendantFonts" => vec![Object::from(cid_font)],
        };
        assert!(is_type0_font(&doc, &type0));
        let m = cid_font_metrics(&doc, &type0);
        assert_eq!(m.advance(3), 0.25);
        assert_eq!(m.advance(4), 0.5);
        assert_eq!(m.ascent(), 880.0);
        assert_eq!(m.descent(), -120.0);
    }

    #[test]
    fn type0_without_dw_defaults_to_1000() {
        let mut doc = Document::with_version("1.5");
        let cid_font = doc.add_object(dictionary! { "Subtype" => "CIDFontType0" });
        let type0 = dictionary! {
            "Subtype" => "Type0",
            "DescendantFonts" => vec![Object::from(cid_font)],
        };
        assert_eq!(cid_font_metrics(&doc, &type0).advance(42), 1.0);
    }

    #[test]
    fn simple_font_is_not_type0() {
        let doc = Document::with_version("1.5");
        assert!(!is_type0_font(&doc, &dictionary! { "Subtype" => "Type1" }));
    }
}
