// Document → plain text.
// Dispatches on file extension. Document handles never outlive a call.

pub mod docx;
pub mod format;
pub mod pdf;

use std::path::Path;

use tracing::{instrument, warn};

use crate::errors::ExtractError;

pub use docx::extract_docx_text;
pub use format::{validate_upload_name, DocumentFormat, UploadFormat};
pub use pdf::extract_pdf_text;

/// Extracts plain text from a `.pdf` or `.docx` file (suffix matched case-sensitively).
///
/// Any other extension yields an empty string without touching the file.
/// Unreadable or corrupt documents fail with `ExtractError::DocumentParse`.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    extract_text_at(path.as_ref())
}

#[instrument(skip_all, fields(path = %path.display()))]
fn extract_text_at(path: &Path) -> Result<String, ExtractError> {
    match DocumentFormat::from_path(path) {
        Some(format) => extract_with(format, path),
        None => {
            warn!("Unsupported document extension, returning empty text");
            Ok(String::new())
        }
    }
}

/// Like `extract_text`, but an unrecognised extension is an `UnsupportedFormat` error.
pub fn extract_document(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| ExtractError::UnsupportedFormat(path.display().to_string()))?;
    extract_with(format, path)
}

fn extract_with(format: DocumentFormat, path: &Path) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(path),
        DocumentFormat::Docx => extract_docx_text(path),
    }
}

/// Concatenates pages or paragraphs, each followed by a newline.
pub(crate) fn join_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(String::new(), |mut text, part| {
        text.push_str(part.as_ref());
        text.push('\n');
        text
    })
}
