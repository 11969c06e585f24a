use std::path::Path;

use pdfscrub::ExtractOptions;

use crate::cli::TextFormat;
use crate::shared::{format_bbox, open_pdf, read_pdf, resolve_pages};

pub fn run(file: &Path, pages: Option<&str>, format: &TextFormat) -> Result<(), i32> {
    let bytes = read_pdf(file)?;
    let pdf = open_pdf(&bytes, ExtractOptions::default())?;
    let page_indices = resolve_pages(pages, pdf.page_count())?;
    let extracted = pdf.extract_text();

    for page in extracted
        .iter()
        .filter(|p| page_indices.contains(&p.page_index))
    {
        match format {
            TextFormat::Text => {
                println!("--- Page {} ---", page.page_index + 1);
                for run in &page.runs {
                    println!("{}\t{}", format_bbox(&run.global_bbox), run.text);
                }
            }
            TextFormat::Json => {
                let obj = serde_json::json!({
                    "page": page.page_index + 1,
                    "runs": page.runs,
                });
                let line = serde_json::to_string(&obj).map_err(|e| {
                    eprintln!("Error: failed to serialize page {}: {e}", page.page_index + 1);
                    1
                })?;
                println!("{line}");
            }
        }
    }

    Ok(())
}
