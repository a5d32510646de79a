//! Axum route handlers for document editing.
//!
//! Each handler maps one request onto one mutation and answers with the new document.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::editing::fields::{Collection, ItemEdit, PersonalEdit};
use crate::editing::mutations::{
    add_item, newest_entry_id, remove_item, update_item, update_personal,
};
use crate::editing::photo::encode_data_url;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

/// Multipart field carrying the photo file.
const PHOTO_FIELD: &str = "photo";

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub collection: Collection,
    pub id: String,
    pub document: ResumeDocument,
}

fn parse_collection(raw: &str) -> Result<Collection, AppError> {
    raw.parse().map_err(AppError::Validation)
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.session.snapshot())
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(edit): Json<PersonalEdit>,
) -> Json<ResumeDocument> {
    Json(state.session.apply(|doc| update_personal(doc, edit)))
}

/// POST /api/v1/resume/:collection
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<(StatusCode, Json<AddItemResponse>), AppError> {
    let collection = parse_collection(&collection)?;
    let document = state.session.apply(|doc| add_item(doc, collection));
    let id = newest_entry_id(&document, collection)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("added entry not found")))?;
    debug!("Added {} entry {id}", collection.as_str());

    Ok((
        StatusCode::CREATED,
        Json(AddItemResponse {
            collection,
            id,
            document,
        }),
    ))
}

/// PATCH /api/v1/resume/:collection/:id
///
/// Unknown ids leave the document as it was.
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<ResumeDocument>, AppError> {
    let collection = parse_collection(&collection)?;
    let edit = ItemEdit::from_json(collection, body).map_err(|e| {
        AppError::Validation(format!("invalid {} edit: {e}", collection.as_str()))
    })?;
    debug!("Updating {} entry {id}", edit.collection().as_str());

    Ok(Json(state.session.apply(|doc| update_item(doc, &id, &edit))))
}

/// DELETE /api/v1/resume/:collection/:id
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<ResumeDocument>, AppError> {
    let collection = parse_collection(&collection)?;
    Ok(Json(
        state.session.apply(|doc| remove_item(doc, collection, &id)),
    ))
}

/// POST /api/v1/resume/photo
///
/// Reads the `photo` part fully and stores it inline as a data URL.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeDocument>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        debug!("Photo upload: {} bytes", data.len());

        let url = encode_data_url(content_type.as_deref(), &data);
        let document = state
            .session
            .apply(|doc| update_personal(doc, PersonalEdit::PhotoUrl(Some(url))));
        return Ok(Json(document));
    }

    Err(AppError::Validation(format!(
        "multipart field '{PHOTO_FIELD}' is missing"
    )))
}

/// DELETE /api/v1/resume/photo
pub async fn handle_remove_photo(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(
        state
            .session
            .apply(|doc| update_personal(doc, PersonalEdit::PhotoUrl(None))),
    )
}
