use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::parsing::vocabulary::{match_section_header, SectionKey};

/// Ordered section key → lines mapping produced by `split_sections`.
///
/// `Header` is always present. A key keeps the position of its first
/// occurrence even when a repeated header resets its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap {
    sections: Vec<(SectionKey, Vec<String>)>,
    superseded_lines: usize,
    header_lines: usize,
}

impl Default for SectionMap {
    fn default() -> Self {
        Self {
            sections: vec![(SectionKey::Header, Vec::new())],
            superseded_lines: 0,
            header_lines: 0,
        }
    }
}

impl SectionMap {
    /// Lines of a section, or an empty slice when the section never appeared.
    pub fn lines(&self, key: SectionKey) -> &[String] {
        self.sections
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.iter().any(|(k, _)| *k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &[String])> {
        self.sections.iter().map(|(k, lines)| (*k, lines.as_slice()))
    }

    /// Number of body lines across all sections.
    pub fn total_lines(&self) -> usize {
        self.sections.iter().map(|(_, lines)| lines.len()).sum()
    }

    /// Lines thrown away because their section header appeared again later.
    pub fn superseded_lines(&self) -> usize {
        self.superseded_lines
    }

    /// Header lines consumed as section delimiters.
    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    /// Switches to `key`, resetting its lines if the section was already open.
    fn open(&mut self, key: SectionKey) {
        self.header_lines += 1;
        match self.sections.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                let dropped = self.sections[idx].1.len();
                if dropped > 0 {
                    warn!(
                        section = key.as_str(),
                        dropped, "Repeated section header discards earlier lines"
                    );
                }
                self.superseded_lines += dropped;
                self.sections[idx].1.clear();
            }
            None => self.sections.push((key, Vec::new())),
        }
    }

    fn push(&mut self, key: SectionKey, line: &str) {
        if let Some((_, lines)) = self.sections.iter_mut().find(|(k, _)| *k == key) {
            lines.push(line.to_string());
        }
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (key, lines) in &self.sections {
            map.serialize_entry(key.as_str(), lines)?;
        }
        map.end()
    }
}

/// Splits plain text into sections using the fixed header vocabulary.
///
/// Lines are trimmed and empty ones dropped. A line equal (ignoring case) to a
/// vocabulary header switches the current section and is not stored anywhere;
/// every other line goes to the current section, starting at `header`.
pub fn split_sections(text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current = SectionKey::Header;

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        match match_section_header(line) {
            Some(key) => {
                current = key;
                map.open(key);
            }
            None => map.push(current, line),
        }
    }

    debug!(
        sections = map.sections.len(),
        lines = map.total_lines(),
        "Split resume text into sections"
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty_lines(text: &str) -> usize {
        text.split('\n').filter(|l| !l.trim().is_empty()).count()
    }

    const SCENARIO_A: &str =
        "John Doe\njohn@x.com\n123-456-7890\nlinkedin.com/in/john\nEDUCATION\nMIT College\nBS CS";

    #[test]
    fn test_scenario_a_segments_header_and_education() {
        let map = split_sections(SCENARIO_A);
        assert_eq!(map.lines(SectionKey::Header).len(), 4);
        assert_eq!(map.lines(SectionKey::Education), &["MIT College", "BS CS"]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![SectionKey::Header, SectionKey::Education]);
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let map = split_sections("  Jane Roe  \n\n   \n\tBerlin\r\n");
        assert_eq!(map.lines(SectionKey::Header), &["Jane Roe", "Berlin"]);
    }

    #[test]
    fn test_empty_text_has_empty_header_only() {
        let map = split_sections("");
        assert!(map.contains(SectionKey::Header));
        assert_eq!(map.total_lines(), 0);
        assert_eq!(map.keys().count(), 1);
    }

    #[test]
    fn test_header_lines_are_never_stored() {
        let text = "Name\nEducation\nX College\n  PROJECTS  \nSite | Rust\nTechnical Skills\nLang: Rust";
        let map = split_sections(text);
        for (_, lines) in map.iter() {
            for line in lines {
                assert!(match_section_header(line).is_none(), "delimiter {line} was stored");
            }
        }
        assert_eq!(map.header_lines(), 3);
    }

    #[test]
    fn test_unknown_header_like_lines_stay_in_current_section() {
        let map = split_sections("Name\nEXPERIENCE\nSoftware Engineer\nCERTIFICATIONS\nAWS SA");
        assert_eq!(
            map.lines(SectionKey::Experience),
            &["Software Engineer", "CERTIFICATIONS", "AWS SA"]
        );
    }

    #[test]
    fn test_missing_section_is_empty_slice() {
        let map = split_sections("Name only");
        assert!(map.lines(SectionKey::Projects).is_empty());
        assert!(!map.contains(SectionKey::Projects));
    }

    #[test]
    fn test_repeated_header_resets_lines_and_keeps_position() {
        let text = "Name\nprojects\nOld | Go\neducation\nA School\nPROJECTS\nNew | Rust";
        let map = split_sections(text);
        assert_eq!(map.lines(SectionKey::Projects), &["New | Rust"]);
        assert_eq!(map.superseded_lines(), 1);
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec![SectionKey::Header, SectionKey::Projects, SectionKey::Education]
        );
    }

    #[test]
    fn test_line_accounting_holds_without_repeats() {
        let text = "A\nB\n\nEducation\nC College\nd\nExperience\nEngineer\n• did x\nLeadership\nclub";
        let map = split_sections(text);
        assert_eq!(map.superseded_lines(), 0);
        assert_eq!(map.total_lines() + map.header_lines(), non_empty_lines(text));
    }

    #[test]
    fn test_line_accounting_holds_with_repeats() {
        let texts = [
            "x\nEducation\na\nb\nEducation\nc\nProjects\nEducation",
            "Education\nEducation\nEducation",
            "\n\n  \n",
            "header\nHEADER\nleadership & activities\nchess\nLEADERSHIP\nrobotics",
        ];
        for text in texts {
            let map = split_sections(text);
            assert_eq!(
                map.total_lines() + map.superseded_lines() + map.header_lines(),
                non_empty_lines(text),
                "accounting failed for {text:?}"
            );
        }
    }

    #[test]
    fn test_leadership_variants_are_distinct_sections() {
        let map = split_sections("N\nLeadership\nA\nLeadership & Activities\nB");
        assert_eq!(map.lines(SectionKey::Leadership), &["A"]);
        assert_eq!(map.lines(SectionKey::LeadershipActivities), &["B"]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let map = split_sections("N\nTechnical Skills\nLang: Rust");
        let encoded = serde_json::to_string(&map).unwrap();
        assert_eq!(encoded, r#"{"header":["N"],"technical skills":["Lang: Rust"]}"#);
    }
}
