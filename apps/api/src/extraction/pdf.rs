use std::panic::{self, AssertUnwindSafe};

use super::ExtractError;

/// Extracts text page by page and joins pages with `\n`.
/// Pages without a text layer contribute an empty segment.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed font tables
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(ExtractError::Pdf(e.to_string())),
        Err(_) => {
            return Err(ExtractError::Pdf(
                "PDF backend aborted while decoding the document".to_string(),
            ))
        }
    };

    tracing::debug!(pages = pages.len(), "extracted PDF text");
    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .iter()
        .map(|page| page.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n")
}
