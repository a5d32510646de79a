pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::editing::handlers;
use crate::enhance::handlers as enhance_handlers;
use crate::preview::handlers as preview_handlers;
use crate::state::AppState;

/// Photos arrive whole in one multipart body.
const PHOTO_BODY_LIMIT: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/editor/status",
            get(enhance_handlers::handle_editor_status),
        )
        // Document
        .route("/api/v1/resume", get(handlers::handle_get_resume))
        .route(
            "/api/v1/resume/personal",
            patch(handlers::handle_update_personal),
        )
        .route(
            "/api/v1/resume/photo",
            post(handlers::handle_upload_photo)
                .delete(handlers::handle_remove_photo)
                .layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
        .route("/api/v1/resume/enhance", post(enhance_handlers::handle_enhance))
        .route("/api/v1/resume/preview", get(preview_handlers::handle_preview))
        .route("/api/v1/resume/print", get(preview_handlers::handle_print))
        // Collections
        .route("/api/v1/resume/:collection", post(handlers::handle_add_item))
        .route(
            "/api/v1/resume/:collection/:id",
            patch(handlers::handle_update_item).delete(handlers::handle_remove_item),
        )
        .with_state(state)
}
