use crate::models::EducationEntry;
use crate::parsing::records::RecordFold;
use crate::parsing::vocabulary::is_institution_line;

/// Groups education lines into entries.
///
/// An institution line (institute / college / school) opens a new entry; every
/// other line is a detail of the open entry. Details seen before the first
/// institution land in an entry whose `institution` is empty.
pub fn parse_education(lines: &[String]) -> Vec<EducationEntry> {
    lines
        .iter()
        .fold(RecordFold::default(), |acc, line| {
            if is_institution_line(line) {
                acc.start(EducationEntry {
                    institution: line.clone(),
                    details: Vec::new(),
                })
            } else {
                acc.update(|entry| entry.details.push(line.clone()))
            }
        })
        .finish()
}
