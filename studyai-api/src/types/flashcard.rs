//! Flashcard-related API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/generate-flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GenerateFlashcardsRequest {
    /// Source text the cards are derived from. Defaults to empty so an
    /// absent field hits handler validation (HTTP 400).
    #[serde(default)]
    pub notes: String,
    /// Uninterpreted difficulty tag; defaults to "medium"
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A flashcard as produced by the sentence-splitting generator, before it
/// is assigned a row id. This is the shape echoed back by the generate
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneratedFlashcard {
    /// Templated question embedding a preview of the source sentence
    pub question: String,
    /// The full source sentence
    pub answer: String,
    pub difficulty: String,
}

/// Response body for POST /api/generate-flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerateFlashcardsResponse {
    pub success: bool,
    pub flashcards: Vec<GeneratedFlashcard>,
    pub message: String,
}

/// A stored flashcard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FlashcardResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub id: Uuid,
    pub user_id: String,
    pub question: String,
    pub answer: String,
    pub difficulty: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: DateTime<Utc>,
}

/// Response body for GET /api/flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListFlashcardsResponse {
    pub flashcards: Vec<FlashcardResponse>,
}
