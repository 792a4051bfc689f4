//! API request/response types, organized by entity.
//!
//! All wire field names are camelCase (`userId`, `notesLength`,
//! `correctAnswer`), matching what the front-end sends and expects.

pub mod flashcard;
pub mod note;
pub mod quiz;

pub use flashcard::{
    FlashcardResponse, GenerateFlashcardsRequest, GenerateFlashcardsResponse, GeneratedFlashcard,
    ListFlashcardsResponse,
};
pub use note::{GetNotesResponse, NotesQuery, SaveNotesRequest, SaveNotesResponse};
pub use quiz::{
    GenerateQuizRequest, GenerateQuizResponse, GeneratedQuiz, ListQuizzesResponse, QuizResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

/// User identifier applied whenever a request omits `userId`.
pub const DEFAULT_USER_ID: &str = "1";

/// Resolve an optional user identifier to the effective one.
pub fn user_id_or_default(user_id: Option<String>) -> String {
    match user_id {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_USER_ID.to_string(),
    }
}
