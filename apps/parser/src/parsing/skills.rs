use crate::models::SkillsMap;
use crate::parsing::vocabulary::split_list;

/// Builds the skills map from `Category: a, b, c` lines.
///
/// Splits on the first colon only. Lines without a colon are ignored and a
/// repeated category keeps the items of its last line.
pub fn parse_skills(lines: &[String]) -> SkillsMap {
    lines
        .iter()
        .filter_map(|line| line.split_once(':'))
        .fold(SkillsMap::new(), |mut skills, (category, items)| {
            skills.insert(category.trim().to_string(), split_list(items));
            skills
        })
}
