use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Contact fields pulled from the lines above the first recognised section header.
/// Every field is an empty string when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Empty when detail lines appeared before any institution line.
    pub institution: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub tech: Vec<String>,
    pub description: Vec<String>,
}

/// Skill category → items, kept in the order categories first appear.
///
/// Serializes as a JSON object. Re-inserting a category replaces its items
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SkillsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: String, items: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = items,
            None => self.entries.push((category, items)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(c, items)| (c.as_str(), items.as_slice()))
    }
}

impl Serialize for SkillsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, items) in &self.entries {
            map.serialize_entry(category, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillsMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = SkillsMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category to a list of items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SkillsMap, A::Error> {
                let mut skills = SkillsMap::new();
                while let Some((category, items)) = access.next_entry::<String, Vec<String>>()? {
                    skills.insert(category, items);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

/// The assembled record handed to the persistence layer.
///
/// Contact fields are flattened to the top level so the JSON shape is
/// `{name, email, phone, linkedin, location, education, experience, skills, projects, leadership}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(flatten)]
    pub basic: BasicInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillsMap,
    pub projects: Vec<ProjectEntry>,
    /// Raw lines, not parsed further.
    pub leadership: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ParsedResume {
        let mut skills = SkillsMap::new();
        skills.insert("Languages".into(), vec!["Rust".into(), "Go".into()]);
        ParsedResume {
            basic: BasicInfo {
                name: "Ada Lovelace".into(),
                email: "ada@example.org".into(),
                ..BasicInfo::default()
            },
            education: vec![EducationEntry {
                institution: "Analytical College".into(),
                details: vec!["BSc Mathematics".into()],
            }],
            experience: vec![],
            skills,
            projects: vec![],
            leadership: vec!["Chess club captain".into()],
        }
    }

    #[test]
    fn test_basic_info_fields_are_flattened() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@example.org");
        assert_eq!(value["location"], "");
        assert!(value.get("basic").is_none());
    }

    #[test]
    fn test_skills_serialize_as_object_in_insertion_order() {
        let mut skills = SkillsMap::new();
        skills.insert("Tools".into(), vec!["Git".into()]);
        skills.insert("Languages".into(), vec!["Rust".into()]);
        let encoded = serde_json::to_string(&skills).unwrap();
        assert_eq!(encoded, r#"{"Tools":["Git"],"Languages":["Rust"]}"#);
    }

    #[test]
    fn test_skills_reinsert_replaces_items_in_place() {
        let mut skills = SkillsMap::new();
        skills.insert("Tools".into(), vec!["Git".into()]);
        skills.insert("Languages".into(), vec!["Rust".into()]);
        skills.insert("Tools".into(), vec!["Docker".into()]);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills.categories().collect::<Vec<_>>(), vec!["Tools", "Languages"]);
        assert_eq!(skills.get("Tools"), Some(&["Docker".to_string()][..]));
    }

    #[test]
    fn test_parsed_resume_reads_back_from_stored_json() {
        let stored = json!({
            "name": "Ada Lovelace",
            "email": "ada@example.org",
            "phone": "",
            "linkedin": "",
            "location": "",
            "education": [{"institution": "Analytical College", "details": ["BSc Mathematics"]}],
            "experience": [],
            "skills": {"Languages": ["Rust", "Go"]},
            "projects": [],
            "leadership": ["Chess club captain"]
        });
        let parsed: ParsedResume = serde_json::from_value(stored).unwrap();
        assert_eq!(parsed, sample());
    }
}
