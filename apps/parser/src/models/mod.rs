pub mod resume;

pub use resume::{BasicInfo, EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry, SkillsMap};
