//! Résumé text extraction and structured parsing.
//!
//! `extract` turns a stored PDF or DOCX upload into plain text, `parsing`
//! segments that text into known sections and folds each section into typed
//! records, and `ingest` runs the whole pipeline for one file.

pub mod config;
pub mod errors;
pub mod extract;
pub mod ingest;
pub mod models;
pub mod parsing;

pub use errors::ExtractError;
pub use extract::{extract_document, extract_text, validate_upload_name};
pub use ingest::{ingest_resume, FormatPolicy, ResumeIngest};
pub use models::ParsedResume;
pub use parsing::{compute_coverage, parse_resume, split_sections, ParseCoverage, SectionMap};
