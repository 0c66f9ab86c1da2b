use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use super::join_lines;
use crate::errors::ExtractError;

/// Extracts PDF text page by page, each page followed by a newline.
/// A page without text contributes just the newline.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let pages = read_pages(path)?;
    debug!(pages = pages.len(), path = %path.display(), "Extracted PDF pages");
    Ok(join_lines(pages))
}

fn read_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ExtractError::document_parse(path, format!("cannot read file: {e}")))?;

    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }))
    .map_err(|_| ExtractError::document_parse(path, "PDF decoder aborted on malformed content"))?
    .map_err(|e| ExtractError::document_parse(path, format!("PDF extraction error: {e}")))?;
    Ok(pages)
}
