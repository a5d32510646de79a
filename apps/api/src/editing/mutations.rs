//! Field mutation layer: every change to a résumé goes through these functions.
//!
//! Each operation takes the current document by reference and returns the next one.
//! Nothing here fails: an unknown identifier yields a document equal to the input.

use uuid::Uuid;

use crate::editing::fields::{Collection, ItemEdit, PersonalEdit};
use crate::models::resume::{
    EducationItem, Entry, ExperienceItem, LanguageItem, ResumeDocument, SkillItem,
};

/// Mints an identifier for a new entry. Never derived from content or position.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Adds a blank entry to `collection` under a fresh identifier.
pub fn add_item(doc: &ResumeDocument, collection: Collection) -> ResumeDocument {
    insert_item(doc, collection, new_entry_id())
}

/// Adds a blank entry with a caller-chosen identifier.
pub fn insert_item(doc: &ResumeDocument, collection: Collection, id: String) -> ResumeDocument {
    let mut next = doc.clone();
    let prepend = collection.prepends();
    match collection {
        Collection::Experience => place(&mut next.experience, ExperienceItem::blank(id), prepend),
        Collection::Education => place(&mut next.education, EducationItem::blank(id), prepend),
        Collection::Skills => place(&mut next.skills, SkillItem::blank(id), prepend),
        Collection::Languages => place(&mut next.languages, LanguageItem::blank(id), prepend),
    }
    next
}

/// Replaces one field of the entry `id` in the collection the edit addresses.
pub fn update_item(doc: &ResumeDocument, id: &str, edit: &ItemEdit) -> ResumeDocument {
    let mut next = doc.clone();
    match edit {
        ItemEdit::Experience(e) => patch(&mut next.experience, id, |item| e.apply(item)),
        ItemEdit::Education(e) => patch(&mut next.education, id, |item| e.apply(item)),
        ItemEdit::Skill(e) => patch(&mut next.skills, id, |item| e.apply(item)),
        ItemEdit::Language(e) => patch(&mut next.languages, id, |item| e.apply(item)),
    }
    next
}

/// Drops the entry `id` from `collection`.
pub fn remove_item(doc: &ResumeDocument, collection: Collection, id: &str) -> ResumeDocument {
    let mut next = doc.clone();
    match collection {
        Collection::Experience => next.experience.retain(|item| item.id() != id),
        Collection::Education => next.education.retain(|item| item.id() != id),
        Collection::Skills => next.skills.retain(|item| item.id() != id),
        Collection::Languages => next.languages.retain(|item| item.id() != id),
    }
    next
}

/// Replaces one field of the personal-info block.
pub fn update_personal(doc: &ResumeDocument, edit: PersonalEdit) -> ResumeDocument {
    let mut next = doc.clone();
    edit.apply(&mut next.personal_info);
    next
}

/// Identifier of the entry `add_item` placed last: first of a prepending collection,
/// last of an appending one.
pub fn newest_entry_id(doc: &ResumeDocument, collection: Collection) -> Option<String> {
    fn pick<T: Entry>(items: &[T], prepend: bool) -> Option<String> {
        let item = if prepend { items.first() } else { items.last() };
        item.map(|i| i.id().to_string())
    }
    let prepend = collection.prepends();
    match collection {
        Collection::Experience => pick(&doc.experience, prepend),
        Collection::Education => pick(&doc.education, prepend),
        Collection::Skills => pick(&doc.skills, prepend),
        Collection::Languages => pick(&doc.languages, prepend),
    }
}

fn place<T>(items: &mut Vec<T>, item: T, prepend: bool) {
    if prepend {
        items.insert(0, item);
    } else {
        items.push(item);
    }
}

fn patch<T: Entry>(items: &mut [T], id: &str, apply: impl Fn(&mut T)) {
    for item in items.iter_mut().filter(|item| item.id() == id) {
        apply(item);
    }
}
