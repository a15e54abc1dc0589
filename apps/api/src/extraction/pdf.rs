use std::panic::{catch_unwind, AssertUnwindSafe};

use super::push_block;

/// Extracts PDF text page by page, one newline after each page that has text.
pub fn extract_text(bytes: &[u8]) -> Result<String, String> {
    // pdf-extract panics on some malformed documents instead of returning an error
    let pages = catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| "PDF parser aborted on malformed input".to_string())?
    .map_err(|e| e.to_string())?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        push_block(&mut text, page);
    }
    text
}
