//! The editing session: sole owner of the current résumé.
//!
//! Every change replaces the held document with a new value produced by
//! `crate::editing`. The lock is never held across an `.await`.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use tracing::info;

use crate::editing::paths::TextField;
use crate::enhance::busy::BusyFields;
use crate::enhance::{AiOperation, TextEnhancer};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

pub struct EditorSession {
    document: RwLock<ResumeDocument>,
    busy: BusyFields,
    enhancer: TextEnhancer,
}

/// Result of one enhancement task.
#[derive(Debug, Clone, Serialize)]
pub struct EnhanceOutcome {
    pub field: String,
    /// False when the field was empty and nothing was sent.
    pub dispatched: bool,
    pub text: String,
    pub document: ResumeDocument,
}

impl EditorSession {
    pub fn new(initial: ResumeDocument, enhancer: TextEnhancer) -> Self {
        Self {
            document: RwLock::new(initial),
            busy: BusyFields::new(),
            enhancer,
        }
    }

    pub fn snapshot(&self) -> ResumeDocument {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the document with `change(current)` and returns the new value.
    pub fn apply(&self, change: impl FnOnce(&ResumeDocument) -> ResumeDocument) -> ResumeDocument {
        let mut current = self
            .document
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = change(&*current);
        *current = next.clone();
        next
    }

    pub fn ai_enabled(&self) -> bool {
        self.enhancer.is_enabled()
    }

    pub fn busy_fields(&self) -> Vec<String> {
        self.busy.snapshot()
    }

    /// Runs one enhancement of `field`: read its text, flag it busy, await the
    /// enhancer, write the result into the document as it is *then*, clear the flag.
    ///
    /// Refused with `Conflict` while the same field is already being enhanced.
    /// The write-back is last-write-wins and a no-op if the entry was removed meanwhile.
    pub async fn enhance_field(
        &self,
        field: &TextField,
        operation: AiOperation,
        context: Option<&str>,
    ) -> Result<EnhanceOutcome, AppError> {
        let key = field.key();
        let text = {
            let doc = self.document.read().unwrap_or_else(PoisonError::into_inner);
            field
                .read(&doc)
                .map(str::to_string)
                .ok_or_else(|| AppError::NotFound(format!("Field {key} not found")))?
        };

        if text.is_empty() {
            return Ok(EnhanceOutcome {
                field: key,
                dispatched: false,
                text,
                document: self.snapshot(),
            });
        }

        let guard = self
            .busy
            .try_acquire(key.clone())
            .ok_or_else(|| AppError::Conflict(format!("Field {key} is already being enhanced")))?;

        let context = context.unwrap_or(field.context_label());
        let result = self.enhancer.enhance(&text, operation, Some(context)).await;

        let document = self.apply(|doc| field.write(doc, result.clone()));
        drop(guard);

        info!("Enhanced {key} ({operation})");
        Ok(EnhanceOutcome {
            field: key,
            dispatched: true,
            text: result,
            document,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::editing::fields::{Collection, ExperienceEdit, ItemEdit};
    use crate::editing::mutations::{remove_item, update_item};
    use crate::editing::paths::EntryText;
    use crate::enhance::testing::{GatedGenerator, ScriptedGenerator};
    use crate::llm_client::TextGenerator;

    fn exp_description() -> TextField {
        TextField::Experience {
            id: "1".into(),
            field: EntryText::Description,
        }
    }

    fn session_with(generator: &Arc<ScriptedGenerator>) -> EditorSession {
        EditorSession::new(
            ResumeDocument::sample(),
            TextEnhancer::new(Some(generator.clone() as Arc<dyn TextGenerator>)),
        )
    }

    #[test]
    fn test_apply_replaces_document() {
        let session = EditorSession::new(ResumeDocument::sample(), TextEnhancer::disabled());
        let edit = ItemEdit::Experience(ExperienceEdit::Company("ACME".into()));
        let next = session.apply(|doc| update_item(doc, "1", &edit));
        assert_eq!(next.experience[0].company, "ACME");
        assert_eq!(session.snapshot(), next);
    }

    #[tokio::test]
    async fn test_enhance_writes_result_back_into_field() {
        let generator = Arc::new(ScriptedGenerator::replying(" Verbesserter Text "));
        let session = session_with(&generator);

        let outcome = session
            .enhance_field(&exp_description(), AiOperation::Polish, None)
            .await
            .unwrap();

        assert!(outcome.dispatched);
        assert_eq!(outcome.text, "Verbesserter Text");
        assert_eq!(outcome.field, "experience/1/description");
        assert_eq!(session.snapshot().experience[0].description, "Verbesserter Text");
        assert!(session.busy_fields().is_empty());

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].0.contains("job description section"));
    }

    #[tokio::test]
    async fn test_enhance_without_credential_keeps_text() {
        let session = EditorSession::new(ResumeDocument::sample(), TextEnhancer::disabled());
        let before = session.snapshot();
        let outcome = session
            .enhance_field(&exp_description(), AiOperation::TranslateToGerman, None)
            .await
            .unwrap();
        assert_eq!(outcome.text, before.experience[0].description);
        assert_eq!(session.snapshot(), before);
    }

    #[tokio::test]
    async fn test_empty_field_is_not_dispatched() {
        let generator = Arc::new(ScriptedGenerator::replying("x"));
        let session = session_with(&generator);
        session.apply(|doc| {
            update_item(
                doc,
                "1",
                &ItemEdit::Experience(ExperienceEdit::Description(String::new())),
            )
        });

        let outcome = session
            .enhance_field(&exp_description(), AiOperation::Polish, None)
            .await
            .unwrap();
        assert!(!outcome.dispatched);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_busy_field_is_refused() {
        let generator = Arc::new(ScriptedGenerator::replying("x"));
        let session = session_with(&generator);
        let _held = session.busy.try_acquire(exp_description().key()).unwrap();

        let result = session
            .enhance_field(&exp_description(), AiOperation::Polish, None)
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_entry_is_not_found() {
        let session = EditorSession::new(ResumeDocument::sample(), TextEnhancer::disabled());
        let field = TextField::Education {
            id: "nope".into(),
            field: EntryText::Description,
        };
        let result = session.enhance_field(&field, AiOperation::Polish, None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    fn gated_session() -> (Arc<EditorSession>, Arc<GatedGenerator>) {
        let generator = Arc::new(GatedGenerator::new());
        let session = Arc::new(EditorSession::new(
            ResumeDocument::sample(),
            TextEnhancer::new(Some(generator.clone() as Arc<dyn TextGenerator>)),
        ));
        (session, generator)
    }

    #[tokio::test]
    async fn test_in_flight_field_is_busy_and_other_edits_survive() {
        let (session, generator) = gated_session();
        let task = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .enhance_field(&exp_description(), AiOperation::Polish, None)
                    .await
            })
        };

        generator.started.notified().await;
        assert_eq!(session.busy_fields(), vec!["experience/1/description".to_string()]);

        let second = session
            .enhance_field(&exp_description(), AiOperation::Polish, None)
            .await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        let edit = ItemEdit::Experience(ExperienceEdit::Company("Neue Firma GmbH".into()));
        session.apply(|doc| update_item(doc, "1", &edit));

        generator.release.notify_one();
        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.text, "late result");

        let doc = session.snapshot();
        assert_eq!(doc.experience[0].description, "late result");
        assert_eq!(doc.experience[0].company, "Neue Firma GmbH");
        assert!(session.busy_fields().is_empty());
    }

    #[tokio::test]
    async fn test_write_back_after_entry_removed_is_noop() {
        let (session, generator) = gated_session();
        let task = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .enhance_field(&exp_description(), AiOperation::Polish, None)
                    .await
            })
        };

        generator.started.notified().await;
        session.apply(|doc| remove_item(doc, Collection::Experience, "1"));
        generator.release.notify_one();

        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.document.experience.is_empty());
        assert!(session.snapshot().experience.is_empty());
        assert!(session.busy_fields().is_empty());
    }
}
