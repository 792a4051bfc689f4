//! OpenAPI Specification for the StudyAI API
//!
//! Generates the OpenAPI document from Rust types and route annotations
//! via utoipa.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorCode};
use crate::routes::{flashcards, health, notes, quiz};
use crate::types::{
    FlashcardResponse, GenerateFlashcardsRequest, GenerateFlashcardsResponse, GenerateQuizRequest,
    GenerateQuizResponse, GeneratedFlashcard, GeneratedQuiz, GetNotesResponse,
    ListFlashcardsResponse, ListQuizzesResponse, QuizResponse, SaveNotesRequest, SaveNotesResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

/// OpenAPI document for the StudyAI API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StudyAI API",
        version = "0.1.0",
        description = "Store study notes and derive flashcards and quiz questions from them",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local Development")
    ),
    tags(
        (name = "Notes", description = "Free-text study notes, one row per user"),
        (name = "Flashcards", description = "Flashcards derived from notes by sentence splitting"),
        (name = "Quiz", description = "Quiz questions derived from notes, with answer submission"),
        (name = "Health", description = "Liveness and readiness checks")
    ),
    paths(
        notes::save_notes,
        notes::get_notes,
        flashcards::generate_flashcards,
        flashcards::list_flashcards,
        quiz::generate_quiz,
        quiz::list_quizzes,
        quiz::submit_answer,
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(
        schemas(
            // === Error Types ===
            ErrorBody, ErrorCode,

            // === Note Types ===
            SaveNotesRequest, SaveNotesResponse, GetNotesResponse,

            // === Flashcard Types ===
            GenerateFlashcardsRequest, GeneratedFlashcard, GenerateFlashcardsResponse,
            FlashcardResponse, ListFlashcardsResponse,

            // === Quiz Types ===
            GenerateQuizRequest, GeneratedQuiz, GenerateQuizResponse,
            QuizResponse, ListQuizzesResponse,
            SubmitAnswerRequest, SubmitAnswerResponse,

            // === Health Types ===
            health::HealthResponse, health::HealthStatus,
        )
    )
)]
pub struct ApiDoc;
