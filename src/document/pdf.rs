// src/document/pdf.rs
use std::path::Path;
use lopdf::Document;
use crate::utils::error::ExtractError;

/// Extracts text page by page, in page order.
///
/// A corrupt file fails the whole document. A single page whose content stream
/// cannot be decoded counts as a page with no text.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path).map_err(|e| ExtractError::malformed(path, e))?;

    let pages = doc.get_pages();
    tracing::debug!("PDF {} has {} pages", path.display(), pages.len());

    let page_texts = pages.keys().map(|&page_num| {
        doc.extract_text(&[page_num]).unwrap_or_else(|e| {
            tracing::warn!("Could not extract text from page {} of {}: {}", page_num, path.display(), e);
            String::new()
        })
    });

    Ok(join_pages(page_texts))
}

/// Appends a newline after every page that yielded text; blank pages add nothing.
/// Trailing whitespace of the whole blob is trimmed.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page in pages {
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push('\n');
    }
    text.trim().to_string()
}
