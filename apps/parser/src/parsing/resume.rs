use tracing::{debug, warn};

use crate::models::ParsedResume;
use crate::parsing::basic_info::extract_basic_info;
use crate::parsing::education::parse_education;
use crate::parsing::experience::parse_experience;
use crate::parsing::projects::parse_projects;
use crate::parsing::sections::{split_sections, SectionMap};
use crate::parsing::skills::parse_skills;
use crate::parsing::vocabulary::SectionKey;

/// Segments `text` and runs every field parser on its section.
/// Missing sections parse as empty; this never fails.
pub fn parse_resume(text: &str) -> ParsedResume {
    let sections = split_sections(text);
    let resume = assemble(&sections);

    if resume == ParsedResume::default() {
        warn!("No resume fields recognised in extracted text");
    } else {
        debug!(
            education = resume.education.len(),
            experience = resume.experience.len(),
            skills = resume.skills.len(),
            projects = resume.projects.len(),
            leadership = resume.leadership.len(),
            "Assembled parsed resume"
        );
    }
    resume
}

/// Builds the record from an already segmented section map.
pub fn assemble(sections: &SectionMap) -> ParsedResume {
    ParsedResume {
        basic: extract_basic_info(sections.lines(SectionKey::Header)),
        education: parse_education(sections.lines(SectionKey::Education)),
        experience: parse_experience(sections.lines(SectionKey::Experience)),
        skills: parse_skills(sections.lines(SectionKey::TechnicalSkills)),
        projects: parse_projects(sections.lines(SectionKey::Projects)),
        // Only the combined heading feeds the record; a plain LEADERSHIP
        // section is segmented but not stored.
        leadership: sections.lines(SectionKey::LeadershipActivities).to_vec(),
    }
}
