//! Notes REST API Routes
//!
//! POST /api/notes overwrites the single note row per user (upsert keyed on
//! the user id). GET /api/notes returns the stored text, degrading to an
//! empty string on a missing row or any lookup failure.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult, ErrorBody},
    types::{user_id_or_default, GetNotesResponse, NotesQuery, SaveNotesRequest, SaveNotesResponse},
};

/// Shared application state for note routes.
#[derive(Clone)]
pub struct NotesState {
    pub db: DbClient,
}

impl NotesState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/notes - Save (upsert) the user's notes
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "Notes",
    request_body = SaveNotesRequest,
    responses(
        (status = 200, description = "Notes saved", body = SaveNotesResponse),
        (status = 400, description = "Notes text missing or empty", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
pub async fn save_notes(
    State(state): State<Arc<NotesState>>,
    Json(req): Json<SaveNotesRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.notes.is_empty() {
        return Err(ApiError::missing_notes());
    }

    let notes_length = req.notes.chars().count();
    let user_id = user_id_or_default(req.user_id);

    state.db.note_upsert(&user_id, &req.notes).await?;

    tracing::info!(%user_id, notes_length, "notes saved");
    Ok(Json(SaveNotesResponse {
        success: true,
        message: "Notes saved".to_string(),
        notes_length,
    }))
}

/// GET /api/notes - Retrieve the user's notes
///
/// Never fails from the client's point of view: a missing row and any store
/// error both collapse into `{ "notes": "" }`.
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "Notes",
    params(
        ("userId" = Option<String>, Query, description = "User identifier, defaults to \"1\""),
    ),
    responses(
        (status = 200, description = "Stored notes text, empty if none", body = GetNotesResponse),
    ),
)]
pub async fn get_notes(
    State(state): State<Arc<NotesState>>,
    Query(params): Query<NotesQuery>,
) -> Json<GetNotesResponse> {
    let user_id = user_id_or_default(params.user_id);

    let notes = match state.db.note_get(&user_id).await {
        Ok(content) => content.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%user_id, error = %err, "note lookup failed, returning empty notes");
            String::new()
        }
    };

    Json(GetNotesResponse { notes })
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the notes routes router (paths relative to /api).
pub fn create_router(db: DbClient) -> axum::Router {
    let state = Arc::new(NotesState::new(db));

    axum::Router::new()
        .route("/notes", axum::routing::post(save_notes))
        .route("/notes", axum::routing::get(get_notes))
        .with_state(state)
}
