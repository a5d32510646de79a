//! Addresses of individual text fields that can be sent through AI enhancement.

use serde::{Deserialize, Serialize};

use crate::editing::fields::{EducationEdit, ExperienceEdit, ItemEdit, PersonalEdit};
use crate::editing::mutations::{update_item, update_personal};
use crate::models::resume::ResumeDocument;

/// Which text of an experience or education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryText {
    /// `position` on experience, `degree` on education.
    Title,
    Description,
}

impl EntryText {
    fn as_str(self) -> &'static str {
        match self {
            EntryText::Title => "title",
            EntryText::Description => "description",
        }
    }
}

/// One text field instance in the document.
///
/// Wire form: `{"section": "experience", "id": "1", "field": "description"}` or
/// `{"section": "jobTitle"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum TextField {
    JobTitle,
    Experience { id: String, field: EntryText },
    Education { id: String, field: EntryText },
}

impl TextField {
    /// Unique key of this field instance, used for busy flags.
    pub fn key(&self) -> String {
        match self {
            TextField::JobTitle => "personal/jobTitle".to_string(),
            TextField::Experience { id, field } => format!("experience/{id}/{}", field.as_str()),
            TextField::Education { id, field } => format!("education/{id}/{}", field.as_str()),
        }
    }

    /// Section label handed to the model to steer tone.
    pub fn context_label(&self) -> &'static str {
        match self {
            TextField::JobTitle => "job title",
            TextField::Experience { field: EntryText::Title, .. } => "job position",
            TextField::Experience { .. } => "job description",
            TextField::Education { field: EntryText::Title, .. } => "degree",
            TextField::Education { .. } => "education description",
        }
    }

    /// Current text of the field, or `None` when its entry no longer exists.
    pub fn read<'a>(&self, doc: &'a ResumeDocument) -> Option<&'a str> {
        match self {
            TextField::JobTitle => Some(&doc.personal_info.job_title),
            TextField::Experience { id, field } => {
                doc.experience.iter().find(|e| &e.id == id).map(|e| match field {
                    EntryText::Title => e.position.as_str(),
                    EntryText::Description => e.description.as_str(),
                })
            }
            TextField::Education { id, field } => {
                doc.education.iter().find(|e| &e.id == id).map(|e| match field {
                    EntryText::Title => e.degree.as_str(),
                    EntryText::Description => e.description.as_str(),
                })
            }
        }
    }

    /// Writes `value` into this field through the mutation layer.
    pub fn write(&self, doc: &ResumeDocument, value: String) -> ResumeDocument {
        match self {
            TextField::JobTitle => update_personal(doc, PersonalEdit::JobTitle(value)),
            TextField::Experience { id, field } => {
                let edit = match field {
                    EntryText::Title => ExperienceEdit::Position(value),
                    EntryText::Description => ExperienceEdit::Description(value),
                };
                update_item(doc, id, &ItemEdit::Experience(edit))
            }
            TextField::Education { id, field } => {
                let edit = match field {
                    EntryText::Title => EducationEdit::Degree(value),
                    EntryText::Description => EducationEdit::Description(value),
                };
                update_item(doc, id, &ItemEdit::Education(edit))
            }
        }
    }
}
