/// Parse a page range string like "1,3-5" into a sorted list of 0-indexed page numbers.
///
/// Input is 1-indexed (user-facing). A range may be open-ended ("4-" runs to
/// the last page). Returns an error for page 0, pages past the end, reversed
/// ranges and malformed numbers.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let start = page_number(start, page_count)?;
                let end = match end.trim() {
                    "" => page_count,
                    end => page_number(end, page_count)?,
                };
                if start > end {
                    return Err(format!("range {part} runs backwards"));
                }
                pages.extend(start - 1..end);
            }
            None => pages.push(page_number(part, page_count)? - 1),
        }
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

/// A 1-indexed page number within the document.
fn page_number(text: &str, page_count: usize) -> Result<usize, String> {
    let text = text.trim();
    let page: usize = text
        .parse()
        .map_err(|_| format!("invalid page number: '{text}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}
