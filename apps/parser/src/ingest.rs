use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::ExtractError;
use crate::extract::{extract_document, extract_text};
use crate::models::ParsedResume;
use crate::parsing::{compute_coverage, parse_resume, ParseCoverage};

/// How an unrecognised or legacy (`.doc`) extension is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPolicy {
    /// Extract nothing and return an empty record.
    #[default]
    Lenient,
    /// Fail with `ExtractError::UnsupportedFormat`.
    Strict,
}

/// Everything the upload handler needs after a successful parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeIngest {
    /// Display name stored next to the record; the parsed `name` field.
    pub name: String,
    pub parsed: ParsedResume,
    pub coverage: ParseCoverage,
}

/// Extracts, parses and scores a stored upload.
///
/// A `DocumentParse` error is a hard failure the caller should treat by
/// discarding the upload. A blank `coverage` is the soft failure: the call
/// succeeded but nothing was recognised.
#[instrument(skip_all, fields(path = %path.as_ref().display(), ?policy))]
pub fn ingest_resume(
    path: impl AsRef<Path>,
    policy: FormatPolicy,
) -> Result<ResumeIngest, ExtractError> {
    let path = path.as_ref();
    let text = match policy {
        FormatPolicy::Lenient => extract_text(path)?,
        FormatPolicy::Strict => extract_document(path)?,
    };

    let parsed = parse_resume(&text);
    let coverage = compute_coverage(&parsed);

    if coverage.is_blank() {
        warn!("Resume produced no structured fields");
    } else {
        info!(
            score = coverage.score,
            missing = ?coverage.missing_sections,
            "Resume parsed"
        );
    }

    Ok(ResumeIngest {
        name: parsed.basic.name.clone(),
        parsed,
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_unsupported_extension_gives_blank_record() {
        let ingest = ingest_resume("/uploads/resume.doc", FormatPolicy::Lenient).unwrap();
        assert_eq!(ingest.parsed, ParsedResume::default());
        assert_eq!(ingest.name, "");
        assert!(ingest.coverage.is_blank());
    }

    #[test]
    fn test_strict_unsupported_extension_fails() {
        let err = ingest_resume("/uploads/resume.doc", FormatPolicy::Strict).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_corrupt_document_is_hard_failure_under_both_policies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "not a zip").unwrap();
        for policy in [FormatPolicy::Lenient, FormatPolicy::Strict] {
            let err = ingest_resume(&path, policy).unwrap_err();
            assert!(err.is_document_parse(), "{policy:?}: {err}");
        }
    }

    #[test]
    fn test_policy_defaults_to_lenient() {
        assert_eq!(FormatPolicy::default(), FormatPolicy::Lenient);
    }
}
