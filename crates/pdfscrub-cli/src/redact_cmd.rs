use std::path::Path;

use pdfscrub::RedactOptions;

use crate::shared::read_pdf;

pub fn run(
    file: &Path,
    terms: &[String],
    output: &Path,
    keep_images: bool,
    no_vector_marks: bool,
) -> Result<(), i32> {
    let bytes = read_pdf(file)?;
    let options = RedactOptions {
        strip_images: !keep_images,
        strip_vector_marks: !no_vector_marks,
        ..RedactOptions::default()
    };

    let result = pdfscrub::redact_with_options(&bytes, terms, &options).map_err(|e| {
        eprintln!("Error: failed to redact PDF: {e}");
        1
    })?;
    let redacted = result.value;

    std::fs::write(output, &redacted.bytes).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;

    eprintln!(
        "Cleared {} run(s) on {} page(s) and {} form(s), stripped {} image(s); wrote {}",
        redacted.cleared.len(),
        redacted.pages_modified,
        redacted.forms_modified,
        redacted.images_stripped,
        output.display()
    );
    Ok(())
}
