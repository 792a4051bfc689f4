//! Quiz-related API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/generate-quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    /// Source text the quiz is derived from. Defaults to empty so an
    /// absent field hits handler validation (HTTP 400).
    #[serde(default)]
    pub notes: String,
    /// Uninterpreted difficulty tag; defaults to "medium"
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A quiz item as produced by the generator. Option 0 is always the source
/// sentence and `correct_answer` is always 0; the remaining options are
/// fixed distractor strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    pub question: String,
    /// Exactly four options
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct_answer: i32,
    pub difficulty: String,
}

/// Response body for POST /api/generate-quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerateQuizResponse {
    pub success: bool,
    pub quizzes: Vec<GeneratedQuiz>,
    pub message: String,
}

/// A stored quiz row. Note that listing quizzes exposes `correctAnswer`,
/// exactly as the original backend does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: Uuid,
    pub user_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub difficulty: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: DateTime<Utc>,
}

/// Response body for GET /api/quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListQuizzesResponse {
    pub quizzes: Vec<QuizResponse>,
}

/// Request body for POST /api/quiz/submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub quiz_id: Uuid,
    /// Zero-based index of the chosen option
    pub user_answer: i32,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response body for POST /api/quiz/submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub correct_answer: i32,
    pub message: String,
}
