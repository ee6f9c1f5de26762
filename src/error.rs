//! Error taxonomy for reading documents and calling the translation API.

use thiserror::Error;

/// Message shown to the user when the translation call fails for a reason
/// other than an HTTP error status.
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed. Please try again.";

#[derive(Error, Debug)]
pub enum TranslateError {
    /// The input could not be read or decoded.
    #[error("Failed to read document: {0}")]
    Read(String),

    /// The API answered with a non-success status.
    #[error("API Error: {status_text}")]
    Api { status: u16, status_text: String },

    /// Transport or response parsing failure. The cause is logged, not shown.
    #[error("{}", TRANSLATION_FAILED_MESSAGE)]
    Failed,
}

impl TranslateError {
    pub(crate) fn read(reason: impl Into<String>) -> Self {
        Self::Read(reason.into())
    }
}
