use std::path::Path;

use pdfscrub::{BBox, ExtractOptions, Pdf};

use crate::page_range::parse_page_range;

/// Read a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be read.
pub fn read_pdf(file: &Path) -> Result<Vec<u8>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    std::fs::read(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Open PDF bytes, printing the parse error on failure.
pub fn open_pdf(bytes: &[u8], options: ExtractOptions) -> Result<Pdf, i32> {
    Pdf::open(bytes, Some(options)).map_err(|e| {
        eprintln!("Error: failed to open PDF: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns all pages (0..page_count).
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Format a bounding box as four space-separated coordinates.
pub fn format_bbox(bbox: &BBox) -> String {
    format!(
        "{:.2} {:.2} {:.2} {:.2}",
        bbox.x0, bbox.y0, bbox.x1, bbox.y1
    )
}
