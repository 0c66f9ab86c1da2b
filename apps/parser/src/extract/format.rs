use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;

/// Container formats the text extractor can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the path suffix. Matching is case-sensitive:
    /// `CV.PDF` is not recognised even though `validate_upload_name` accepts it.
    pub fn from_path(path: &Path) -> Option<Self> {
        let path = path.to_string_lossy();
        if path.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if path.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// Formats accepted at the upload boundary. Legacy `.doc` is accepted here but
/// has no extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadFormat {
    Pdf,
    Doc,
    Docx,
}

impl UploadFormat {
    pub fn document_format(&self) -> Option<DocumentFormat> {
        match self {
            UploadFormat::Pdf => Some(DocumentFormat::Pdf),
            UploadFormat::Docx => Some(DocumentFormat::Docx),
            UploadFormat::Doc => None,
        }
    }
}

/// Checks an uploaded file name before anything is stored or parsed.
pub fn validate_upload_name(file_name: &str) -> Result<UploadFormat, ExtractError> {
    let format = match lowercase_extension(Path::new(file_name)).as_deref() {
        Some("pdf") => Some(UploadFormat::Pdf),
        Some("doc") => Some(UploadFormat::Doc),
        Some("docx") => Some(UploadFormat::Docx),
        _ => None,
    };
    format.ok_or_else(|| {
        ExtractError::UnsupportedFormat(format!(
            "{file_name}: only PDF, DOC, DOCX files are allowed"
        ))
    })
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
