//! Plain-text extraction: strict UTF-8 decode.

use rulechat_types::error::ExtractionError;

/// Decode plain-text bytes as UTF-8. Decode errors propagate.
pub(crate) fn extract_txt(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| ExtractionError::Decode {
        filename: filename.to_string(),
    })
}
