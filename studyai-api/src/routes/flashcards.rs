//! Flashcard REST API Routes
//!
//! POST /api/generate-flashcards splits the submitted notes into sentences
//! and persists up to ten cards, one insert per card with no surrounding
//! transaction. GET /api/flashcards lists a user's cards, degrading to an
//! empty list on any query error.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    db::DbClient,
    error::{ApiError, ApiResult, ErrorBody},
    generate,
    types::{
        user_id_or_default, GenerateFlashcardsRequest, GenerateFlashcardsResponse,
        ListFlashcardsResponse, NotesQuery,
    },
};

/// Shared application state for flashcard routes.
#[derive(Clone)]
pub struct FlashcardsState {
    pub db: DbClient,
}

impl FlashcardsState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/generate-flashcards - Derive and persist flashcards
#[utoipa::path(
    post,
    path = "/api/generate-flashcards",
    tag = "Flashcards",
    request_body = GenerateFlashcardsRequest,
    responses(
        (status = 200, description = "Cards generated and stored", body = GenerateFlashcardsResponse),
        (status = 400, description = "Notes text missing or empty", body = ErrorBody),
        (status = 500, description = "Store failure, possibly mid-batch", body = ErrorBody),
    ),
)]
pub async fn generate_flashcards(
    State(state): State<Arc<FlashcardsState>>,
    Json(req): Json<GenerateFlashcardsRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.notes.trim().is_empty() {
        return Err(ApiError::missing_notes());
    }

    let difficulty = generate::difficulty_or_default(req.difficulty);
    let user_id = user_id_or_default(req.user_id);
    let cards = generate::flashcards(&req.notes, &difficulty);

    // One insert per card, awaited sequentially. A failure on card k leaves
    // cards 1..k-1 committed; that partial-write behavior is contractual.
    for card in &cards {
        state.db.flashcard_insert(&user_id, card).await?;
    }

    tracing::info!(%user_id, count = cards.len(), "flashcards generated");
    let message = format!("Generated {} flashcards", cards.len());
    Ok(Json(GenerateFlashcardsResponse {
        success: true,
        flashcards: cards,
        message,
    }))
}

/// GET /api/flashcards - List a user's flashcards
#[utoipa::path(
    get,
    path = "/api/flashcards",
    tag = "Flashcards",
    params(
        ("userId" = Option<String>, Query, description = "User identifier, defaults to \"1\""),
    ),
    responses(
        (status = 200, description = "Stored flashcards, empty on error", body = ListFlashcardsResponse),
    ),
)]
pub async fn list_flashcards(
    State(state): State<Arc<FlashcardsState>>,
    Query(params): Query<NotesQuery>,
) -> Json<ListFlashcardsResponse> {
    let user_id = user_id_or_default(params.user_id);

    let flashcards = match state.db.flashcard_list(&user_id).await {
        Ok(cards) => cards,
        Err(err) => {
            tracing::warn!(%user_id, error = %err, "flashcard list failed, returning empty");
            Vec::new()
        }
    };

    Json(ListFlashcardsResponse { flashcards })
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the flashcard routes router (paths relative to /api).
pub fn create_router(db: DbClient) -> axum::Router {
    let state = Arc::new(FlashcardsState::new(db));

    axum::Router::new()
        .route(
            "/generate-flashcards",
            axum::routing::post(generate_flashcards),
        )
        .route("/flashcards", axum::routing::get(list_flashcards))
        .with_state(state)
}
