//! Document extraction — turns an uploaded resume into plain text.
//!
//! The upload's format is decided once, from the filename, into an
//! [`UploadedDocument`]. Everything downstream matches on that variant.

mod docx;
mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

use bytes::Bytes;
use thiserror::Error;

/// Failure to read a document whose format was recognised.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("failed to read DOCX: {0}")]
    Docx(String),
}

/// An uploaded file, tagged by the format its filename claims.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadedDocument {
    Pdf(Bytes),
    Docx(Bytes),
    Unknown(Bytes),
}

impl UploadedDocument {
    /// Suffix match is case-sensitive: `cv.PDF` is `Unknown`.
    pub fn from_upload(filename: Option<&str>, bytes: Bytes) -> Self {
        match filename {
            Some(name) if name.ends_with(".pdf") => UploadedDocument::Pdf(bytes),
            Some(name) if name.ends_with(".docx") => UploadedDocument::Docx(bytes),
            _ => UploadedDocument::Unknown(bytes),
        }
    }

    pub fn format(&self) -> &'static str {
        match self {
            UploadedDocument::Pdf(_) => "pdf",
            UploadedDocument::Docx(_) => "docx",
            UploadedDocument::Unknown(_) => "unknown",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            UploadedDocument::Pdf(b) | UploadedDocument::Docx(b) | UploadedDocument::Unknown(b) => {
                b.len()
            }
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// Unknown formats yield an empty string, not an error.
pub fn extract_text(document: &UploadedDocument) -> Result<String, ExtractError> {
    match document {
        UploadedDocument::Pdf(bytes) => pdf::extract(bytes),
        UploadedDocument::Docx(bytes) => docx::extract(bytes),
        UploadedDocument::Unknown(bytes) => {
            tracing::debug!(size = bytes.len(), "unsupported upload format, using empty text");
            Ok(String::new())
        }
    }
}
