use serde::{Deserialize, Serialize};

use crate::models::ParsedResume;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Populated,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionCoverage {
    pub section: String,
    pub status: CoverageStatus,
    pub item_count: usize,
}

/// How much of a parsed resume the heuristics managed to fill.
///
/// Extraction never signals failure, so callers use this to spot the soft
/// failure of an all-empty record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseCoverage {
    /// Populated sections / all sections, in `[0, 1]`.
    pub score: f64,
    pub sections: Vec<SectionCoverage>,
    pub missing_sections: Vec<String>,
}

impl ParseCoverage {
    pub fn is_blank(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.status == CoverageStatus::Empty)
    }
}

const CONTACT_SECTION: &str = "contact";

pub fn compute_coverage(resume: &ParsedResume) -> ParseCoverage {
    let basic = &resume.basic;
    let contact_fields = [
        &basic.name,
        &basic.email,
        &basic.phone,
        &basic.linkedin,
        &basic.location,
    ]
    .iter()
    .filter(|field| !field.is_empty())
    .count();

    let counts = [
        (CONTACT_SECTION, contact_fields),
        ("education", resume.education.len()),
        ("experience", resume.experience.len()),
        ("skills", resume.skills.len()),
        ("projects", resume.projects.len()),
        ("leadership", resume.leadership.len()),
    ];

    let sections: Vec<SectionCoverage> = counts
        .iter()
        .map(|(section, item_count)| SectionCoverage {
            section: section.to_string(),
            status: if *item_count > 0 {
                CoverageStatus::Populated
            } else {
                CoverageStatus::Empty
            },
            item_count: *item_count,
        })
        .collect();

    let populated = sections
        .iter()
        .filter(|s| s.status == CoverageStatus::Populated)
        .count();
    let missing_sections = sections
        .iter()
        .filter(|s| s.status == CoverageStatus::Empty)
        .map(|s| s.section.clone())
        .collect();

    ParseCoverage {
        score: (populated as f64 / sections.len() as f64).clamp(0.0, 1.0),
        sections,
        missing_sections,
    }
}
