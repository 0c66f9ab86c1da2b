use crate::models::ProjectEntry;
use crate::parsing::records::RecordFold;
use crate::parsing::vocabulary::{
    is_bullet_line, is_project_line, split_list, strip_bullet, PROJECT_DELIMITER,
};

/// Groups project lines into entries.
///
/// `Title | tech, tech` opens a new entry (split on the first pipe only), a
/// bullet line extends the open entry's description, and other lines are dropped.
pub fn parse_projects(lines: &[String]) -> Vec<ProjectEntry> {
    lines
        .iter()
        .fold(RecordFold::default(), |acc, line| {
            if is_project_line(line) {
                acc.start(project_from_title_line(line))
            } else if is_bullet_line(line) {
                acc.update(|entry| entry.description.push(strip_bullet(line)))
            } else {
                acc
            }
        })
        .finish()
}

fn project_from_title_line(line: &str) -> ProjectEntry {
    let (title, tech) = line.split_once(PROJECT_DELIMITER).unwrap_or((line, ""));
    ProjectEntry {
        title: title.trim().to_string(),
        tech: split_list(tech),
        description: Vec::new(),
    }
}
