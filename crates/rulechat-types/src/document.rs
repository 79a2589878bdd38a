//! Uploaded document types for rulechat.
//!
//! An upload event is a list of byte blobs with declared MIME types.
//! Extraction turns them into a single corpus text (see rulechat-infra).

use serde::{Deserialize, Serialize};

/// MIME type for PDF documents.
pub const APPLICATION_PDF: &str = "application/pdf";

/// MIME type for plain-text documents.
pub const TEXT_PLAIN: &str = "text/plain";

/// A single uploaded document: raw bytes plus its declared MIME type.
///
/// The MIME type is declared by the upload surface (file extension when
/// loading from disk), not sniffed from the bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedDocument {
    /// Original filename, used in error messages.
    pub filename: String,
    /// Declared MIME type (e.g., "application/pdf", "text/plain").
    pub mime_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}
