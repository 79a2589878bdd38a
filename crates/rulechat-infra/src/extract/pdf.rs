//! PDF text extraction via lopdf.

use lopdf::Document;

use rulechat_types::error::ExtractionError;

/// Extract the text of every page, concatenated in page order.
///
/// No separator is inserted between pages. Any parse or extraction
/// failure propagates as [`ExtractionError::Pdf`].
pub(crate) fn extract_pdf(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf {
        filename: filename.to_string(),
        message: e.to_string(),
    })?;

    let mut text = String::new();
    // get_pages is keyed by 1-based page number, so iteration is page order.
    for (&page_number, _) in doc.get_pages().iter() {
        let page_text = doc
            .extract_text(&[page_number])
            .map_err(|e| ExtractionError::Pdf {
                filename: filename.to_string(),
                message: format!("page {page_number}: {e}"),
            })?;
        text.push_str(&page_text);
    }
    Ok(text)
}
