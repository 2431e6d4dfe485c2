use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_macros::debug_handler;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{dto::NoteDto, service::NoteService};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, get_all_notes, get_note_by_id, update_note, delete_note),
    components(schemas(NoteDto)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api-doc/openapi.json", get(openapi))
        .route("/notes", get(get_all_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note_by_id).put(update_note).delete(delete_note),
        )
        .with_state(service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Notes service is up").into_response()
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteDto,
    responses(
        (status = 201, description = "Note created successfully", body = NoteDto),
        (status = 500, description = "Note carried an ID or storage failed")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<NoteDto>,
) -> Response {
    match service.create_note(payload.into()).await {
        Ok(note) => {
            tracing::info!("Note created: {:?}", note.id);
            (StatusCode::CREATED, Json(NoteDto::from(note))).into_response()
        }
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create note").into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => {
            tracing::info!("Retrieved all notes, count: {}", notes.len());
            let notes: Vec<NoteDto> = notes.into_iter().map(NoteDto::from).collect();
            (StatusCode::OK, Json(notes)).into_response()
        }
        Err(e) => {
            tracing::error!("failed to get note entries: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to get all notes").into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteDto),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_note_by_id(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_note_by_id(id).await {
        Ok(Some(note)) => {
            tracing::info!("Retrieved note by ID: {}", id);
            (StatusCode::OK, Json(NoteDto::from(note))).into_response()
        }
        Ok(None) => {
            tracing::info!("Note not found with ID: {}", id);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!("failed to get note entry: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to get note").into_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = NoteDto,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteDto),
        (status = 500, description = "Note does not exist or storage failed")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Json(payload): Json<NoteDto>,
) -> Response {
    match service.update_note(id, payload.into()).await {
        Ok(note) => {
            tracing::info!("Note updated: {}", id);
            (StatusCode::OK, Json(NoteDto::from(note))).into_response()
        }
        Err(e) => {
            tracing::error!("failed to update note entry with ID {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update note").into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted, or there was nothing to delete"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note_by_id(id).await {
        Ok(()) => {
            tracing::info!("Note deleted: {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            tracing::error!("failed to delete note entry with ID {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete note").into_response()
        }
    }
}
