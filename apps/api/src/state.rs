use std::sync::Arc;

use crate::session::EditorSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one document of this process, plus its enhancement flags.
    pub session: Arc<EditorSession>,
}
