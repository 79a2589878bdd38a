use thiserror::Error;

/// Errors from document text extraction.
///
/// Extraction failures are not caught at the extraction site; they
/// propagate to the chat loop's generic error display.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed for '{filename}': {message}")]
    Pdf { filename: String, message: String },

    #[error("'{filename}' is not valid UTF-8")]
    Decode { filename: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from secret resolution.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("environment variable {0} is not set")]
    Missing(String),

    #[error("environment variable {0} is not valid Unicode")]
    NotUnicode(String),
}
