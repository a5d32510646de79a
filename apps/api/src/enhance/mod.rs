//! Text enhancement: AI rewriting of a single free-text field.
//!
//! Never fails from the caller's point of view: without a configured generator, or when
//! the call errors, the original text comes back unchanged.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::enhance::prompts::{
    CONTEXT_LINE_TEMPLATE, FIX_GRAMMAR_PROMPT_TEMPLATE, POLISH_PROMPT_TEMPLATE,
    TRANSLATE_TO_GERMAN_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::PERSONA_SYSTEM;
use crate::llm_client::TextGenerator;

pub mod busy;
pub mod handlers;
pub mod prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiOperation {
    Polish,
    TranslateToGerman,
    FixGrammar,
}

impl fmt::Display for AiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AiOperation::Polish => "polish",
            AiOperation::TranslateToGerman => "translate_to_german",
            AiOperation::FixGrammar => "fix_grammar",
        })
    }
}

/// Builds the user prompt for one enhancement.
pub fn build_prompt(text: &str, operation: AiOperation, context: Option<&str>) -> String {
    let template = match operation {
        AiOperation::Polish => POLISH_PROMPT_TEMPLATE,
        AiOperation::TranslateToGerman => TRANSLATE_TO_GERMAN_PROMPT_TEMPLATE,
        AiOperation::FixGrammar => FIX_GRAMMAR_PROMPT_TEMPLATE,
    };
    let mut prompt = template.replace("{text}", text);
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        prompt.push_str(&CONTEXT_LINE_TEMPLATE.replace("{context}", context));
    }
    prompt
}

/// Rewrites text through the configured generator, if any.
#[derive(Clone)]
pub struct TextEnhancer {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl TextEnhancer {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// An enhancer with no credential: every call returns its input.
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Returns the enhanced text, or `text` itself on any failure.
    /// Empty or whitespace-only input yields `""` without a call.
    pub async fn enhance(
        &self,
        text: &str,
        operation: AiOperation,
        context: Option<&str>,
    ) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let Some(generator) = &self.generator else {
            warn!("No API key configured; returning text unchanged");
            return text.to_string();
        };

        let prompt = build_prompt(text, operation, context);
        debug!("Enhancing text: operation={operation}, chars={}", text.len());

        match generator.generate(&prompt, PERSONA_SYSTEM).await {
            Ok(output) => {
                let trimmed = output.trim();
                if trimmed.is_empty() {
                    text.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(e) => {
                error!("Text enhancement failed ({operation}): {e}");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Generator that answers every call with a fixed script and records prompts.
    pub struct ScriptedGenerator {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        pub prompts: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), system.to_string()));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "quota exceeded".to_string(),
                }),
            }
        }
    }

    /// Blocks inside `generate` until released, so a test can act mid-flight.
    pub struct GatedGenerator {
        pub started: Notify,
        pub release: Notify,
    }

    impl GatedGenerator {
        pub fn new() -> Self {
            Self {
                started: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for GatedGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok("late result".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedGenerator;
    use super::*;

    fn enhancer_with(generator: &Arc<ScriptedGenerator>) -> TextEnhancer {
        TextEnhancer::new(Some(generator.clone() as Arc<dyn TextGenerator>))
    }

    #[test]
    fn test_polish_prompt_embeds_text() {
        let prompt = build_prompt("led team", AiOperation::Polish, None);
        assert!(prompt.starts_with("Rewrite the following text to be more professional"));
        assert!(prompt.ends_with("Input text: \"led team\""));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_context_line_is_appended() {
        let prompt = build_prompt("x", AiOperation::TranslateToGerman, Some("job description"));
        assert!(prompt.starts_with("Translate the following text"));
        assert!(prompt.ends_with("\nContext: This is for the job description section of the resume."));
    }

    #[test]
    fn test_each_operation_has_distinct_instruction() {
        let polish = build_prompt("t", AiOperation::Polish, None);
        let translate = build_prompt("t", AiOperation::TranslateToGerman, None);
        let grammar = build_prompt("t", AiOperation::FixGrammar, None);
        assert!(grammar.contains("Correct the grammar and spelling"));
        assert_ne!(polish, translate);
        assert_ne!(translate, grammar);
    }

    #[test]
    fn test_operation_wire_names() {
        let op: AiOperation = serde_json::from_str(r#""translate_to_german""#).unwrap();
        assert_eq!(op, AiOperation::TranslateToGerman);
        assert_eq!(AiOperation::FixGrammar.to_string(), "fix_grammar");
    }

    #[tokio::test]
    async fn test_blank_input_returns_empty_without_call() {
        let generator = Arc::new(ScriptedGenerator::replying("should not be used"));
        let enhancer = enhancer_with(&generator);

        assert_eq!(enhancer.enhance("", AiOperation::Polish, None).await, "");
        assert_eq!(enhancer.enhance("  \n\t ", AiOperation::FixGrammar, None).await, "");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_returns_input() {
        let enhancer = TextEnhancer::disabled();
        assert!(!enhancer.is_enabled());
        let out = enhancer
            .enhance("Teamleitung", AiOperation::Polish, Some("job description"))
            .await;
        assert_eq!(out, "Teamleitung");
    }

    #[tokio::test]
    async fn test_failed_call_returns_input() {
        let generator = Arc::new(ScriptedGenerator::failing(429));
        let enhancer = enhancer_with(&generator);
        let out = enhancer.enhance("original", AiOperation::Polish, None).await;
        assert_eq!(out, "original");
        assert_eq!(generator.calls(), 1, "exactly one attempt, no retry");
    }

    #[tokio::test]
    async fn test_polish_returns_trimmed_service_text() {
        let generator = Arc::new(ScriptedGenerator::replying(
            "  Leitete ein Team von fünf Entwicklern.\n",
        ));
        let enhancer = enhancer_with(&generator);
        let out = enhancer
            .enhance("led a team of five devs", AiOperation::Polish, Some("job description"))
            .await;
        assert_eq!(out, "Leitete ein Team von fünf Entwicklern.");
        assert_eq!(generator.calls(), 1);

        let prompts = generator.prompts.lock().unwrap();
        let (prompt, system) = &prompts[0];
        assert!(prompt.contains("\"led a team of five devs\""));
        assert!(prompt.contains("job description section"));
        assert_eq!(system, PERSONA_SYSTEM);
    }

    #[tokio::test]
    async fn test_blank_service_reply_falls_back_to_input() {
        let generator = Arc::new(ScriptedGenerator::replying("   "));
        let enhancer = enhancer_with(&generator);
        let out = enhancer.enhance("keep me", AiOperation::FixGrammar, None).await;
        assert_eq!(out, "keep me");
    }
}
