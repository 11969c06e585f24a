//! End-to-end redaction tests: PDF bytes → redact → reload and re-extract.

mod common;

use common::{DocBuilder, all_texts, font_resources, page_content, pdf_with_content};
use lopdf::dictionary;
use pdfscrub::{ExtractWarningCode, RedactOptions};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn redacted_output_has_no_matching_run() {
    let bytes = pdf_with_content(
        b"BT /F1 12 Tf 72 720 Td (Card 4111-1111) Tj 0 -14 Td (Balance due) Tj ET",
    );
    let redacted = pdfscrub::redact(&bytes, &["4111"]).unwrap();

    let texts = all_texts(&redacted);
    assert!(texts.iter().all(|t| !t.contains("4111")));
    assert!(texts.iter().any(|t| t == "Balance due"));
}

#[test]
fn literal_octal_and_hex_forms_are_all_removed() {
    let content = b"BT /F1 12 Tf 72 720 Td (Secret) Tj 0 -14 Td \
        (\\123\\145\\143\\162\\145\\164) Tj 0 -14 Td <536563726574> Tj 0 -14 Td \
        <536563726574> Tj 0 -14 Td (Unrelated) Tj ET";
    let bytes = pdf_with_content(content);
    let redacted = pdfscrub::redact(&bytes, &["Secret"]).unwrap();

    let edited = page_content(&redacted, 0);
    assert!(!contains(&edited, b"(Secret)"));
    assert!(!contains(&edited, b"\\123\\145\\143"));
    assert!(!contains(&edited, b"<536563726574>"));
    assert!(contains(&edited, b"(Unrelated) Tj"));
    assert!(contains(&edited, b"72 720 Td"));
}

#[test]
fn uppercase_hex_form_is_removed() {
    let bytes = pdf_with_content(b"BT /F1 12 Tf <4B4559> Tj (keep) Tj ET");
    let redacted = pdfscrub::redact(&bytes, &["KEY"]).unwrap();
    let edited = page_content(&redacted, 0);
    assert!(!contains(&edited, b"<4B4559>"));
    assert!(contains(&edited, b"(keep)"));
}

#[test]
fn tj_array_run_is_removed_with_its_adjustments() {
    let bytes = pdf_with_content(b"BT /F1 12 Tf [(\\101)-120.00(\\102)] TJ (C) Tj ET");
    let redacted = pdfscrub::redact(&bytes, &["AB"]).unwrap();
    let edited = page_content(&redacted, 0);
    assert!(contains(&edited, b"[] TJ"));
    assert_eq!(all_texts(&redacted), vec!["", "C"]);
}

#[test]
fn redacting_twice_is_byte_identical() {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    let image = b.image();
    let mut resources = font_resources(font);
    resources.set("XObject", dictionary! { "Im0" => image });
    b.page(
        b"q 10 0 0 10 0 0 cm /Im0 Do Q BT /F1 12 Tf (Secret) Tj (Plain) Tj ET",
        resources,
    );
    let bytes = b.build();

    let once = pdfscrub::redact(&bytes, &["Secret"]).unwrap();
    let twice = pdfscrub::redact(&once, &["Secret"]).unwrap();
    assert_ne!(once, bytes);
    assert_eq!(once, twice);
}

#[test]
fn document_without_matches_is_returned_unchanged() {
    let bytes = pdf_with_content(b"BT /F1 12 Tf (Nothing to hide) Tj ET");
    let options = RedactOptions {
        strip_images: false,
        ..RedactOptions::default()
    };
    let result = pdfscrub::redact_with_options(&bytes, &["Secret"], &options).unwrap();
    assert_eq!(result.value.bytes, bytes);
}

#[test]
fn images_are_emptied_and_text_kept() {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    let image = b.image();
    let mut resources = font_resources(font);
    resources.set("XObject", dictionary! { "Im0" => image });
    b.page(b"/Im0 Do BT /F1 12 Tf (Caption) Tj ET", resources);
    let redacted = pdfscrub::redact(&b.build(), &["nothing"]).unwrap();

    let doc = lopdf::Document::load_mem(&redacted).unwrap();
    let stream = doc.get_object(image).unwrap().as_stream().unwrap();
    assert!(stream.content.is_empty());
    assert_eq!(all_texts(&redacted), vec!["Caption"]);
}

#[test]
fn keep_images_leaves_image_objects() {
    let mut b = DocBuilder::new();
    let image = b.image();
    b.page(b"/Im0 Do", dictionary! { "XObject" => dictionary! { "Im0" => image } });
    let bytes = b.build();
    let options = RedactOptions {
        strip_images: false,
        ..RedactOptions::default()
    };
    let result = pdfscrub::redact_with_options(&bytes, &["x"], &options).unwrap();
    let doc = lopdf::Document::load_mem(&result.value.bytes).unwrap();
    let stream = doc.get_object(image).unwrap().as_stream().unwrap();
    assert_eq!(stream.content, vec![0x80]);
}

#[test]
fn image_list_shape_mismatch_is_a_warning() {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    let mut resources = font_resources(font);
    resources.set("XObject", "NotADictionary");
    b.page(b"BT /F1 12 Tf (Secret) Tj ET", resources);
    let result =
        pdfscrub::redact_with_options(&b.build(), &["Secret"], &RedactOptions::default()).unwrap();

    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.code == ExtractWarningCode::ImageStripSkipped)
    );
    assert!(all_texts(&result.value.bytes).iter().all(|t| !t.contains("Secret")));
}

#[test]
fn term_on_one_page_is_removed_from_every_page() {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    b.page(b"BT /F1 12 Tf (ACME-42) Tj ET", font_resources(font));
    // same bytes shown through the hex form on the second page
    b.page(b"BT /F1 12 Tf <41434d452d3432> Tj (tail) Tj ET", font_resources(font));
    let redacted = pdfscrub::redact(&b.build(), &["ACME"]).unwrap();

    assert!(!contains(&page_content(&redacted, 1), b"<41434d452d3432>"));
    assert_eq!(all_texts(&redacted), vec!["", "", "tail"]);
}

#[test]
fn text_inside_a_form_is_removed_from_the_form_stream() {
    let mut b = DocBuilder::new();
    let font = b.helvetica();
    let form = b.form(b"BT /F1 12 Tf (Secret) Tj (Footer) Tj ET", Some(font_resources(font)));
    b.page(
        b"/Fm0 Do BT /F1 12 Tf (Secret) Tj ET",
        dictionary! {
            "Font" => dictionary! { "F1" => font },
            "XObject" => dictionary! { "Fm0" => form },
        },
    );
    let pdf = pdfscrub::Pdf::open(&b.build(), None).unwrap();
    let result = pdf.redact(&["Secret"], &RedactOptions::default()).unwrap();

    assert_eq!(result.value.cleared.len(), 2);
    assert_eq!(result.value.pages_modified, 1);
    assert_eq!(result.value.forms_modified, 1);
    assert!(!contains(&page_content(&result.value.bytes, 0), b"(Secret)"));

    let doc = lopdf::Document::load_mem(&result.value.bytes).unwrap();
    let form_stream = doc.get_object(form).unwrap().as_stream().unwrap();
    assert_eq!(form_stream.content, b"BT /F1 12 Tf () Tj (Footer) Tj ET".to_vec());
    let texts = all_texts(&result.value.bytes);
    assert!(texts.iter().all(|t| !t.contains("Secret")));
    assert!(texts.iter().any(|t| t == "Footer"));
}

#[test]
fn integer_kerned_tj_array_is_removed() {
    let bytes = pdf_with_content(b"BT /F1 12 Tf 72 720 Td [(Sec)-20(ret)] TJ (Other) Tj ET");
    let result =
        pdfscrub::redact_with_options(&bytes, &["Secret"], &RedactOptions::default()).unwrap();

    assert_eq!(result.value.cleared.len(), 1);
    assert!(result.warnings.is_empty());
    assert!(contains(&page_content(&result.value.bytes, 0), b"72 720 Td [] TJ"));
    assert_eq!(all_texts(&result.value.bytes), vec!["", "Other"]);
}

#[test]
fn escaped_literal_is_removed() {
    let bytes = pdf_with_content(b"BT /F1 12 Tf (Smith \\(acct\\)) Tj (Jones) Tj ET");
    let result =
        pdfscrub::redact_with_options(&bytes, &["Smith"], &RedactOptions::default()).unwrap();

    assert_eq!(result.value.cleared.len(), 1);
    assert_eq!(all_texts(&result.value.bytes), vec!["", "Jones"]);
}

#[test]
fn numeric_operands_survive_a_digit_term() {
    let bytes =
        pdf_with_content(b"BT /F1 12 Tf 100 712 Td (12) Tj 0 -14 Td (Keep) Tj ET");
    let redacted = pdfscrub::redact(&bytes, &["12"]).unwrap();

    assert_eq!(
        page_content(&redacted, 0),
        b"BT /F1 12 Tf 100 712 Td () Tj 0 -14 Td (Keep) Tj ET".to_vec()
    );
    let pages = pdfscrub::extract_text(&redacted).unwrap();
    let keep = &pages[0].runs[1];
    assert_eq!(keep.text, "Keep");
    assert_eq!(keep.matrix.to_array()[4], 100.0);
    assert_eq!(keep.matrix.to_array()[5], 698.0);
}
