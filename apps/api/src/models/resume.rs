use serde::{Deserialize, Serialize};

/// Proficiency labels offered by the editor for language entries.
/// The model stores any string; this list only drives the editing surface.
pub const LANGUAGE_PROFICIENCIES: [&str; 5] = [
    "Grundkenntnisse",
    "Gut",
    "Fließend",
    "Verhandlungssicher",
    "Muttersprache",
];

/// Skill levels offered by the editor, with their display labels.
pub const SKILL_LEVELS: [(i64, &str); 5] = [
    (1, "Basis"),
    (2, "Gut"),
    (3, "Sehr gut"),
    (4, "Profi"),
    (5, "Expert"),
];

pub const DEFAULT_SKILL_LEVEL: i64 = 3;
pub const DEFAULT_LANGUAGE_PROFICIENCY: &str = "Fließend";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    /// Street and house number.
    pub address: String,
    pub city: String,
    pub zip: String,
    pub birth_date: String,
    pub birth_place: String,
    /// Inline `data:` URL of the uploaded photo.
    pub photo_url: Option<String>,
    pub website: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub position: String,
    pub company: String,
    pub city: String,
    pub start_date: String,
    /// Kept as entered even while `current` is set; the preview shows "Heute" instead.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    /// 1–5 in the editor. Not clamped here.
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageItem {
    pub id: String,
    pub language: String,
    pub proficiency: String,
}

/// The whole résumé. Edited only through `crate::editing`, which returns a new value
/// per change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub languages: Vec<LanguageItem>,
}

/// Anything stored in one of the document's collections.
pub trait Entry {
    fn id(&self) -> &str;

    /// A blank entry as created by "add" in the editor.
    fn blank(id: String) -> Self;
}

impl Entry for ExperienceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl Entry for EducationItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

impl Entry for SkillItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

impl Entry for LanguageItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn blank(id: String) -> Self {
        Self {
            id,
            language: String::new(),
            proficiency: DEFAULT_LANGUAGE_PROFICIENCY.to_string(),
        }
    }
}

impl ResumeDocument {
    /// The document every session starts from.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                first_name: "Max".into(),
                last_name: "Mustermann".into(),
                job_title: "Softwareentwickler".into(),
                email: "max.mustermann@example.com".into(),
                phone: "+49 123 456789".into(),
                address: "Musterstraße 1".into(),
                city: "Berlin".into(),
                zip: "10115".into(),
                birth_date: "1990-05-15".into(),
                birth_place: "Hamburg".into(),
                photo_url: None,
                website: String::new(),
                linkedin: String::new(),
            },
            experience: vec![ExperienceItem {
                id: "1".into(),
                position: "Senior Frontend Developer".into(),
                company: "Tech Solutions GmbH".into(),
                city: "Berlin".into(),
                start_date: "2021-01-01".into(),
                end_date: String::new(),
                current: true,
                description: "Leitung des Frontend-Teams für die Neuentwicklung der \
                    E-Commerce-Plattform. Implementierung von CI/CD Pipelines und \
                    Micro-Frontend Architektur."
                    .into(),
            }],
            education: vec![EducationItem {
                id: "1".into(),
                school: "TU Berlin".into(),
                degree: "Master of Science Informatik".into(),
                city: "Berlin".into(),
                start_date: "2015-10-01".into(),
                end_date: "2018-09-30".into(),
                current: false,
                description: "Schwerpunkt: Software Engineering und KI. \
                    Masterarbeit über neuronale Netze."
                    .into(),
            }],
            skills: vec![
                skill("1", "React / TypeScript", 5),
                skill("2", "Node.js", 4),
                skill("3", "Docker", 3),
            ],
            languages: vec![
                language("1", "Deutsch", "Muttersprache"),
                language("2", "Englisch", "Verhandlungssicher"),
            ],
        }
    }
}

fn skill(id: &str, name: &str, level: i64) -> SkillItem {
    SkillItem {
        id: id.into(),
        name: name.into(),
        level,
    }
}

fn language(id: &str, name: &str, proficiency: &str) -> LanguageItem {
    LanguageItem {
        id: id.into(),
        language: name.into(),
        proficiency: proficiency.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_shape() {
        let doc = ResumeDocument::sample();
        assert_eq!(doc.personal_info.first_name, "Max");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.skills.len(), 3);
        assert_eq!(doc.languages.len(), 2);
        assert!(doc.experience[0].current);
        assert!(doc.personal_info.photo_url.is_none());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ResumeDocument::sample()).unwrap();
        assert_eq!(json["personalInfo"]["firstName"], "Max");
        assert!(json["personalInfo"]["photoUrl"].is_null());
        assert_eq!(json["experience"][0]["startDate"], "2021-01-01");
        assert_eq!(json["skills"][0]["level"], 5);
    }

    #[test]
    fn test_blank_entries_use_editor_defaults() {
        let skill = SkillItem::blank("x".into());
        assert_eq!(skill.name, "");
        assert_eq!(skill.level, DEFAULT_SKILL_LEVEL);

        let lang = LanguageItem::blank("y".into());
        assert_eq!(lang.proficiency, "Fließend");
        assert!(LANGUAGE_PROFICIENCIES.contains(&lang.proficiency.as_str()));

        let exp = ExperienceItem::blank("z".into());
        assert_eq!(exp.id, "z");
        assert!(!exp.current);
        assert!(exp.description.is_empty());
    }

    #[test]
    fn test_out_of_range_skill_level_deserializes() {
        let skill: SkillItem =
            serde_json::from_str(r#"{"id":"9","name":"Rust","level":11}"#).unwrap();
        assert_eq!(skill.level, 11);
    }
}
