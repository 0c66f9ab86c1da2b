use crate::models::ExperienceEntry;
use crate::parsing::records::RecordFold;
use crate::parsing::vocabulary::{is_bullet_line, is_role_line, strip_bullet};

/// Groups experience lines into roles with bullet points.
///
/// A role line opens a new entry, a bullet line adds a point to the open
/// entry, and anything else (company names, dates) is dropped.
pub fn parse_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    lines
        .iter()
        .fold(RecordFold::default(), |acc, line| {
            if is_role_line(line) {
                acc.start(ExperienceEntry {
                    role: line.clone(),
                    points: Vec::new(),
                })
            } else if is_bullet_line(line) {
                acc.update(|entry| entry.points.push(strip_bullet(line)))
            } else {
                acc
            }
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_roles_with_points() {
        let entries = parse_experience(&lines(&[
            "Software Engineer",
            "Acme Corp, Jan 2022 - Present",
            "• Cut p99 latency by 40%",
            "•Migrated CI to GitHub Actions",
            "Engineering Intern",
            "• Wrote integration tests",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, "Software Engineer");
        assert_eq!(
            entries[0].points,
            vec!["Cut p99 latency by 40%", "Migrated CI to GitHub Actions"]
        );
        assert_eq!(entries[1].role, "Engineering Intern");
        assert_eq!(entries[1].points, vec!["Wrote integration tests"]);
    }

    #[test]
    fn test_non_role_non_bullet_lines_are_dropped() {
        let entries = parse_experience(&lines(&["Acme Corp", "2020 - 2021"]));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_pipe_line_is_not_a_role() {
        let entries = parse_experience(&lines(&["Backend Engineer | Acme", "• Did things"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "");
        assert_eq!(entries[0].points, vec!["Did things"]);
    }

    #[test]
    fn test_leading_bullets_collect_under_unnamed_role() {
        let entries = parse_experience(&lines(&["• orphan point", "Product Manager", "• shipped"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, "");
        assert_eq!(entries[0].points, vec!["orphan point"]);
        assert_eq!(entries[1].role, "Product Manager");
    }

    #[test]
    fn test_indented_bullet_is_not_a_bullet() {
        // Segmenter trims lines, so only untrimmed callers hit this.
        let entries = parse_experience(&lines(&["Data Engineer", "  • indented"]));
        assert!(entries[0].points.is_empty());
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_experience(&[]).is_empty());
    }
}
