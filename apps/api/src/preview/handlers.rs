use axum::{extract::State, response::Html};
use chrono::Local;

use crate::preview::{render_preview, RenderMode};
use crate::state::AppState;

/// GET /api/v1/resume/preview
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    render(&state, RenderMode::Screen)
}

/// GET /api/v1/resume/print
///
/// Same page, but it opens the browser's print / save-as-PDF dialog on load.
pub async fn handle_print(State(state): State<AppState>) -> Html<String> {
    render(&state, RenderMode::Print)
}

fn render(state: &AppState, mode: RenderMode) -> Html<String> {
    let doc = state.session.snapshot();
    Html(render_preview(&doc, Local::now().date_naive(), mode))
}
