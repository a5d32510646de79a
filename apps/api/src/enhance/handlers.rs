//! Axum route handlers for AI enhancement and editor status.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::editing::paths::TextField;
use crate::enhance::AiOperation;
use crate::errors::AppError;
use crate::models::resume::{LANGUAGE_PROFICIENCIES, SKILL_LEVELS};
use crate::session::EnhanceOutcome;
use crate::state::AppState;

/// Shown in the editor while no API key is configured.
pub const MISSING_KEY_NOTICE: &str =
    "Gemini API key not detected. AI features will be disabled.";

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub target: TextField,
    pub operation: AiOperation,
    /// Overrides the section label derived from `target`.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EditorStatus {
    pub ai_enabled: bool,
    pub notice: Option<&'static str>,
    pub busy_fields: Vec<String>,
    /// Choices the editing surface offers for skills and languages.
    pub skill_levels: Vec<SkillLevelOption>,
    pub language_proficiencies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct SkillLevelOption {
    pub level: i64,
    pub label: &'static str,
}

/// POST /api/v1/resume/enhance
///
/// Rewrites one text field and stores the result in it. A failing or unconfigured
/// AI backend leaves the text as it was; only a field that is already being enhanced
/// (409) or no longer exists (404) is refused.
///
/// The work runs in its own task, so a client that disconnects mid-call does not
/// cancel the write-back.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceOutcome>, AppError> {
    let session = state.session.clone();
    let task = tokio::spawn(async move {
        session
            .enhance_field(&request.target, request.operation, request.context.as_deref())
            .await
    });
    let outcome = task.await.map_err(anyhow::Error::from)??;
    Ok(Json(outcome))
}

/// GET /api/v1/editor/status
pub async fn handle_editor_status(State(state): State<AppState>) -> Json<EditorStatus> {
    let ai_enabled = state.session.ai_enabled();
    Json(EditorStatus {
        ai_enabled,
        notice: (!ai_enabled).then_some(MISSING_KEY_NOTICE),
        busy_fields: state.session.busy_fields(),
        skill_levels: SKILL_LEVELS
            .iter()
            .map(|&(level, label)| SkillLevelOption { level, label })
            .collect(),
        language_proficiencies: &LANGUAGE_PROFICIENCIES,
    })
}
