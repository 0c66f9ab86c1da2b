use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while turning an uploaded document into plain text.
///
/// Field parsing never fails: absent patterns produce empty fields, so this
/// enum only covers the extraction boundary.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse document {}: {reason}", .path.display())]
    DocumentParse { path: PathBuf, reason: String },

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
}

impl ExtractError {
    pub fn document_parse(path: &Path, reason: impl Into<String>) -> Self {
        ExtractError::DocumentParse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// True when the document itself was unreadable, as opposed to rejected by format.
    pub fn is_document_parse(&self) -> bool {
        matches!(self, ExtractError::DocumentParse { .. })
    }
}
