// Resume text → structured record.
// Segmentation and every field parser are pure and total: bad input yields
// empty fields, never an error.

pub mod basic_info;
pub mod coverage;
pub mod education;
pub mod experience;
pub mod projects;
mod records;
pub mod resume;
pub mod sections;
pub mod skills;
pub mod vocabulary;

pub use basic_info::extract_basic_info;
pub use coverage::{compute_coverage, ParseCoverage};
pub use education::parse_education;
pub use experience::parse_experience;
pub use projects::parse_projects;
pub use resume::parse_resume;
pub use sections::{split_sections, SectionMap};
pub use skills::parse_skills;
pub use vocabulary::SectionKey;
