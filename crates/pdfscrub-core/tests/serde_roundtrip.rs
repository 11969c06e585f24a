//! Serde serialization/deserialization round-trip tests.
//!
//! These tests verify that the public output types can be serialized to JSON
//! and deserialized back, producing equal values, and pin the JSON shapes the
//! CLI prints.

#![cfg(feature = "serde")]

use pdfscrub_core::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

fn sample_run() -> TextRun {
    TextRun {
        text: "AB".to_string(),
        chunks: vec![
            TextChunk::Bytes(b"A".to_vec()),
            TextChunk::Adjustment(-120.0),
            TextChunk::Bytes(b"B".to_vec()),
        ],
        bytes: b"AB".to_vec(),
        matrix: Matrix::new(1.0, 0.0, 0.0, 1.0, 72.0, 720.0),
        local_bbox: BBox::new(0.0, -2.0, 15.5, 8.5),
        global_bbox: BBox::new(72.0, 718.0, 87.5, 728.5),
        translation_method: TranslationMethod::SimpleEncoding,
        displacement: 15.5,
    }
}

#[test]
fn test_serde_matrix_is_six_numbers() {
    let m = Matrix::new(2.0, 0.0, 0.0, 3.0, 10.0, 20.0);
    assert_eq!(serde_json::to_string(&m).unwrap(), "[2.0,0.0,0.0,3.0,10.0,20.0]");
    roundtrip(&m);
    roundtrip(&Matrix::IDENTITY);
}

#[test]
fn test_serde_bbox_is_four_numbers() {
    let b = BBox::new(10.0, 20.0, 300.0, 400.0);
    assert_eq!(serde_json::to_string(&b).unwrap(), "[10.0,20.0,300.0,400.0]");
    roundtrip(&b);
}

#[test]
fn test_serde_text_chunk() {
    assert_eq!(
        serde_json::to_string(&TextChunk::Adjustment(-50.0)).unwrap(),
        r#"{"adjustment":-50.0}"#
    );
    roundtrip(&TextChunk::Bytes(vec![0, 65, 255]));
}

#[test]
fn test_serde_translation_method() {
    roundtrip(&TranslationMethod::ToUnicode);
    roundtrip(&TranslationMethod::SimpleEncoding);
    roundtrip(&TranslationMethod::Default);
}

#[test]
fn test_serde_text_run() {
    roundtrip(&sample_run());
}

#[test]
fn test_serde_page_text() {
    roundtrip(&PageText::new(3, vec![sample_run(), sample_run()]));
    roundtrip(&PageText::new(0, Vec::new()));
}

#[test]
fn test_serde_warning() {
    let warning = ExtractWarning::new(ExtractWarningCode::MissingResource, "font /F9 not found")
        .on_page(2)
        .at_operator(14, "F9");
    roundtrip(&warning);
    roundtrip(&ExtractWarning::new(
        ExtractWarningCode::Other("custom".to_string()),
        "something else",
    ));
}

#[test]
fn test_serde_warning_codes() {
    for code in [
        ExtractWarningCode::MalformedStream,
        ExtractWarningCode::MissingResource,
        ExtractWarningCode::UnsupportedFontEncoding,
        ExtractWarningCode::ImageStripSkipped,
        ExtractWarningCode::ResourceLimitReached,
        ExtractWarningCode::RedactionIncomplete,
    ] {
        roundtrip(&code);
    }
}
