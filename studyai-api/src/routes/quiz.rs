//! Quiz REST API Routes
//!
//! POST /api/generate-quiz derives up to five four-option items from the
//! submitted notes; option 0 is always correct by construction. GET
//! /api/quiz lists a user's items (correct answers included, as the
//! original backend exposes them). POST /api/quiz/submit grades an answer
//! by strict index comparison and appends to the answer log.

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
        user_id_or_default, GenerateQuizRequest, GenerateQuizResponse, ListQuizzesResponse,
        NotesQuery, SubmitAnswerRequest, SubmitAnswerResponse,
    },
};

/// Shared application state for quiz routes.
#[derive(Clone)]
pub struct QuizState {
    pub db: DbClient,
}

impl QuizState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/generate-quiz - Derive and persist quiz items
#[utoipa::path(
    post,
    path = "/api/generate-quiz",
    tag = "Quiz",
    request_body = GenerateQuizRequest,
    responses(
        (status = 200, description = "Quiz items generated and stored", body = GenerateQuizResponse),
        (status = 400, description = "Notes text missing or empty", body = ErrorBody),
        (status = 500, description = "Store failure, possibly mid-batch", body = ErrorBody),
    ),
)]
pub async fn generate_quiz(
    State(state): State<Arc<QuizState>>,
    Json(req): Json<GenerateQuizRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.notes.trim().is_empty() {
        return Err(ApiError::missing_notes());
    }

    let difficulty = generate::difficulty_or_default(req.difficulty);
    let user_id = user_id_or_default(req.user_id);
    let quizzes = generate::quiz(&req.notes, &difficulty);

    // Sequential inserts, no transaction; partial failure leaves a partial
    // set persisted.
    for quiz in &quizzes {
        state.db.quiz_insert(&user_id, quiz).await?;
    }

    tracing::info!(%user_id, count = quizzes.len(), "quiz generated");
    let message = format!("Generated {} quiz questions", quizzes.len());
    Ok(Json(GenerateQuizResponse {
        success: true,
        quizzes,
        message,
    }))
}

/// GET /api/quiz - List a user's quiz items
#[utoipa::path(
    get,
    path = "/api/quiz",
    tag = "Quiz",
    params(
        ("userId" = Option<String>, Query, description = "User identifier, defaults to \"1\""),
    ),
    responses(
        (status = 200, description = "Stored quiz items, empty on error", body = ListQuizzesResponse),
    ),
)]
pub async fn list_quizzes(
    State(state): State<Arc<QuizState>>,
    Query(params): Query<NotesQuery>,
) -> Json<ListQuizzesResponse> {
    let user_id = user_id_or_default(params.user_id);

    let quizzes = match state.db.quiz_list(&user_id).await {
        Ok(quizzes) => quizzes,
        Err(err) => {
            tracing::warn!(%user_id, error = %err, "quiz list failed, returning empty");
            Vec::new()
        }
    };

    Json(ListQuizzesResponse { quizzes })
}

/// POST /api/quiz/submit - Grade a submitted answer
///
/// Looks up the stored correct index, compares by strict equality, records
/// the attempt, and reports the verdict. An unknown quiz id yields 404 and
/// no answer-log row.
#[utoipa::path(
    post,
    path = "/api/quiz/submit",
    tag = "Quiz",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, description = "Answer graded and logged", body = SubmitAnswerResponse),
        (status = 404, description = "No such quiz", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
pub async fn submit_answer(
    State(state): State<Arc<QuizState>>,
    Json(req): Json<SubmitAnswerRequest>,
) -> ApiResult<impl IntoResponse> {
    let correct_answer = state
        .db
        .quiz_correct_answer(req.quiz_id)
        .await?
        .ok_or_else(|| ApiError::quiz_not_found(req.quiz_id))?;

    let is_correct = req.user_answer == correct_answer;
    let user_id = user_id_or_default(req.user_id);

    state
        .db
        .quiz_answer_insert(req.quiz_id, &user_id, req.user_answer, is_correct)
        .await?;

    let message = if is_correct {
        "Correct!"
    } else {
        "Incorrect. Try again!"
    };

    Ok(Json(SubmitAnswerResponse {
        correct: is_correct,
        correct_answer,
        message: message.to_string(),
    }))
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the quiz routes router (paths relative to /api).
pub fn create_router(db: DbClient) -> axum::Router {
    let state = Arc::new(QuizState::new(db));

    axum::Router::new()
        .route("/generate-quiz", axum::routing::post(generate_quiz))
        .route("/quiz", axum::routing::get(list_quizzes))
        .route("/quiz/submit", axum::routing::post(submit_answer))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    // Validation runs before the first store call, so these tests drive the
    // real router without a database behind the pool.
    fn test_router() -> axum::Router {
        let db = DbClient::from_config(&DbConfig::default()).unwrap();
        create_router(db)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_quiz_empty_notes_rejected_with_400() {
        let response = test_router()
            .oneshot(post_json("/generate-quiz", r#"{"notes":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Notes are required");
    }

    #[tokio::test]
    async fn test_generate_quiz_absent_notes_rejected_with_400() {
        let response = test_router()
            .oneshot(post_json("/generate-quiz", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_message_format() {
        let quizzes = generate::quiz("The quick brown fox jumps over the dog.", "medium");
        assert_eq!(
            format!("Generated {} quiz questions", quizzes.len()),
            "Generated 1 quiz questions"
        );
    }
}
