//! Keyword tables that drive segmentation and record detection.
//!
//! Control flow in the parsers only calls the matching functions here, so the
//! vocabulary can be edited without touching the state machines.

use serde::{Deserialize, Serialize};

/// Keys of a `SectionMap`. `Header` holds every line before the first recognised header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKey {
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "experience")]
    Experience,
    #[serde(rename = "technical skills")]
    TechnicalSkills,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "leadership")]
    Leadership,
    #[serde(rename = "leadership & activities")]
    LeadershipActivities,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Header => "header",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::TechnicalSkills => "technical skills",
            SectionKey::Projects => "projects",
            SectionKey::Leadership => "leadership",
            SectionKey::LeadershipActivities => "leadership & activities",
        }
    }
}

/// Lower-cased header lines recognised as section boundaries.
pub const SECTION_HEADERS: &[(&str, SectionKey)] = &[
    ("education", SectionKey::Education),
    ("experience", SectionKey::Experience),
    ("technical skills", SectionKey::TechnicalSkills),
    ("projects", SectionKey::Projects),
    ("leadership", SectionKey::Leadership),
    ("leadership & activities", SectionKey::LeadershipActivities),
];

/// Substrings that mark an education line as the start of a new institution.
pub const INSTITUTION_KEYWORDS: &[&str] = &["institute", "college", "school"];

/// Substrings that mark an experience line as a role title.
pub const ROLE_KEYWORDS: &[&str] = &["intern", "engineer", "manager"];

pub const BULLET_MARKER: char = '•';

/// Separates a project title from its tech list. Also disqualifies a line from being a role.
pub const PROJECT_DELIMITER: char = '|';

/// Case-insensitive exact match of a whole (already trimmed) line against `SECTION_HEADERS`.
pub fn match_section_header(line: &str) -> Option<SectionKey> {
    let lower = line.to_lowercase();
    SECTION_HEADERS
        .iter()
        .find(|(header, _)| *header == lower)
        .map(|(_, key)| *key)
}

pub fn is_institution_line(line: &str) -> bool {
    contains_any(line, INSTITUTION_KEYWORDS)
}

/// A role line has no pipe and mentions a role keyword. Pipe lines belong to projects.
pub fn is_role_line(line: &str) -> bool {
    !line.contains(PROJECT_DELIMITER) && contains_any(line, ROLE_KEYWORDS)
}

pub fn is_project_line(line: &str) -> bool {
    line.contains(PROJECT_DELIMITER)
}

pub fn is_bullet_line(line: &str) -> bool {
    line.starts_with(BULLET_MARKER)
}

/// Strips every bullet glyph from the line, then trims.
pub fn strip_bullet(line: &str) -> String {
    line.replace(BULLET_MARKER, "").trim().to_string()
}

/// Comma-split with each item trimmed. Empty items are kept.
pub fn split_list(items: &str) -> Vec<String> {
    items.split(',').map(|item| item.trim().to_string()).collect()
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}
