//! Integration tests for the `redact` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("pdfscrub").unwrap()
}

/// A one-page PDF showing `content` with Helvetica as `/F1` and an image
/// as `/Im0`.
fn pdf_with_image(content: &[u8]) -> (Vec<u8>, lopdf::ObjectId) {
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 1,
            "Height" => 1,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
        },
        vec![0x10],
    ));
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            "XObject" => dictionary! { "Im0" => Object::Reference(image_id) },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    (buf, image_id)
}

fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

fn image_content(pdf: &[u8], id: lopdf::ObjectId) -> Vec<u8> {
    let doc = lopdf::Document::load_mem(pdf).unwrap();
    doc.get_object(id).unwrap().as_stream().unwrap().content.clone()
}

#[test]
fn redact_writes_output_without_term() {
    let (pdf, image) =
        pdf_with_image(b"/Im0 Do BT /F1 12 Tf (IBAN DE89 3704) Tj 0 -14 Td (Total) Tj ET");
    let input = write_temp_pdf(&pdf);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.pdf");

    cmd()
        .args(["redact", input.path().to_str().unwrap(), "--term", "DE89"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Cleared 1 run(s)"));

    let redacted = std::fs::read(&out).unwrap();
    assert!(image_content(&redacted, image).is_empty());

    cmd()
        .args(["text", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total"))
        .stdout(predicate::str::contains("DE89").not());
}

#[test]
fn keep_images_flag_preserves_images() {
    let (pdf, image) = pdf_with_image(b"/Im0 Do BT /F1 12 Tf (secret) Tj ET");
    let input = write_temp_pdf(&pdf);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.pdf");

    cmd()
        .args([
            "redact",
            input.path().to_str().unwrap(),
            "-t",
            "secret",
            "--keep-images",
        ])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(image_content(&std::fs::read(&out).unwrap(), image), vec![0x10]);
}

#[test]
fn redact_unwritable_output_fails() {
    let (pdf, _) = pdf_with_image(b"BT /F1 12 Tf (x) Tj ET");
    let input = write_temp_pdf(&pdf);

    cmd()
        .args([
            "redact",
            input.path().to_str().unwrap(),
            "--term",
            "x",
            "-o",
            "/nonexistent/pdfscrub/out.pdf",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn verbose_logs_cleared_runs() {
    let (pdf, _) = pdf_with_image(b"BT /F1 12 Tf (card 4111) Tj ET");
    let input = write_temp_pdf(&pdf);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.pdf");

    cmd()
        .args(["-v", "redact", input.path().to_str().unwrap(), "--term", "4111"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("clearing text run"));
}
