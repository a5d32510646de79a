//! Typed field edits: one closed enum per entity kind.
//!
//! Each variant names a field and carries a value of that field's type, so an edit is
//! either well-formed at deserialization or rejected there. Wire form:
//! `{ "field": "position", "value": "Lead Engineer" }`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    EducationItem, ExperienceItem, LanguageItem, PersonalInfo, SkillItem,
};

/// The four ordered collections of a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Experience,
    Education,
    Skills,
    Languages,
}

impl Collection {
    /// New experience/education entries go on top, skills and languages at the end.
    pub fn prepends(self) -> bool {
        matches!(self, Collection::Experience | Collection::Education)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Skills => "skills",
            Collection::Languages => "languages",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Collection::Experience),
            "education" => Ok(Collection::Education),
            "skills" => Ok(Collection::Skills),
            "languages" => Ok(Collection::Languages),
            other => Err(format!(
                "unknown collection '{other}' (expected experience, education, skills or languages)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PersonalEdit {
    FirstName(String),
    LastName(String),
    JobTitle(String),
    Email(String),
    Phone(String),
    Address(String),
    City(String),
    Zip(String),
    BirthDate(String),
    BirthPlace(String),
    PhotoUrl(Option<String>),
    Website(String),
    Linkedin(String),
}

impl PersonalEdit {
    pub fn apply(self, info: &mut PersonalInfo) {
        match self {
            PersonalEdit::FirstName(v) => info.first_name = v,
            PersonalEdit::LastName(v) => info.last_name = v,
            PersonalEdit::JobTitle(v) => info.job_title = v,
            PersonalEdit::Email(v) => info.email = v,
            PersonalEdit::Phone(v) => info.phone = v,
            PersonalEdit::Address(v) => info.address = v,
            PersonalEdit::City(v) => info.city = v,
            PersonalEdit::Zip(v) => info.zip = v,
            PersonalEdit::BirthDate(v) => info.birth_date = v,
            PersonalEdit::BirthPlace(v) => info.birth_place = v,
            PersonalEdit::PhotoUrl(v) => info.photo_url = v,
            PersonalEdit::Website(v) => info.website = v,
            PersonalEdit::Linkedin(v) => info.linkedin = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceEdit {
    Position(String),
    Company(String),
    City(String),
    StartDate(String),
    EndDate(String),
    /// Does not touch `end_date`.
    Current(bool),
    Description(String),
}

impl ExperienceEdit {
    pub fn apply(&self, item: &mut ExperienceItem) {
        match self {
            ExperienceEdit::Position(v) => item.position = v.clone(),
            ExperienceEdit::Company(v) => item.company = v.clone(),
            ExperienceEdit::City(v) => item.city = v.clone(),
            ExperienceEdit::StartDate(v) => item.start_date = v.clone(),
            ExperienceEdit::EndDate(v) => item.end_date = v.clone(),
            ExperienceEdit::Current(v) => item.current = *v,
            ExperienceEdit::Description(v) => item.description = v.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationEdit {
    School(String),
    Degree(String),
    City(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

impl EducationEdit {
    pub fn apply(&self, item: &mut EducationItem) {
        match self {
            EducationEdit::School(v) => item.school = v.clone(),
            EducationEdit::Degree(v) => item.degree = v.clone(),
            EducationEdit::City(v) => item.city = v.clone(),
            EducationEdit::StartDate(v) => item.start_date = v.clone(),
            EducationEdit::EndDate(v) => item.end_date = v.clone(),
            EducationEdit::Current(v) => item.current = *v,
            EducationEdit::Description(v) => item.description = v.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SkillEdit {
    Name(String),
    Level(i64),
}

impl SkillEdit {
    pub fn apply(&self, item: &mut SkillItem) {
        match self {
            SkillEdit::Name(v) => item.name = v.clone(),
            SkillEdit::Level(v) => item.level = *v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LanguageEdit {
    Language(String),
    Proficiency(String),
}

impl LanguageEdit {
    pub fn apply(&self, item: &mut LanguageItem) {
        match self {
            LanguageEdit::Language(v) => item.language = v.clone(),
            LanguageEdit::Proficiency(v) => item.proficiency = v.clone(),
        }
    }
}

/// An edit addressed to one entry of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEdit {
    Experience(ExperienceEdit),
    Education(EducationEdit),
    Skill(SkillEdit),
    Language(LanguageEdit),
}

impl ItemEdit {
    pub fn collection(&self) -> Collection {
        match self {
            ItemEdit::Experience(_) => Collection::Experience,
            ItemEdit::Education(_) => Collection::Education,
            ItemEdit::Skill(_) => Collection::Skills,
            ItemEdit::Language(_) => Collection::Languages,
        }
    }

    /// Parses a request body as the edit type of `collection`.
    pub fn from_json(
        collection: Collection,
        body: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match collection {
            Collection::Experience => ItemEdit::Experience(serde_json::from_value(body)?),
            Collection::Education => ItemEdit::Education(serde_json::from_value(body)?),
            Collection::Skills => ItemEdit::Skill(serde_json::from_value(body)?),
            Collection::Languages => ItemEdit::Language(serde_json::from_value(body)?),
        })
    }
}
