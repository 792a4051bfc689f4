//! REST client for the StudyAI backend.
//!
//! One async method per endpoint, with the same request/response types the
//! server uses. Error responses (`{ "error": msg }`) are decoded into
//! [`ApiClientError::Api`] carrying the HTTP status and message.

use crate::config::ClientConfig;
use studyai_api::types::{
    GenerateFlashcardsRequest, GenerateFlashcardsResponse, GenerateQuizRequest,
    GenerateQuizResponse, GetNotesResponse, ListFlashcardsResponse, ListQuizzesResponse,
    SaveNotesRequest, SaveNotesResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
use studyai_api::ErrorBody;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Typed client wrapping every StudyAI REST endpoint.
#[derive(Clone)]
pub struct StudyClient {
    client: reqwest::Client,
    base_url: String,
}

impl StudyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    /// Save (upsert) study notes for a user.
    pub async fn save_notes(
        &self,
        notes: &str,
        user_id: Option<&str>,
    ) -> Result<SaveNotesResponse, ApiClientError> {
        let req = SaveNotesRequest {
            notes: notes.to_string(),
            user_id: user_id.map(str::to_string),
        };
        self.post_json("/api/notes", &req).await
    }

    /// Retrieve stored notes; the server returns an empty string when none
    /// exist.
    pub async fn get_notes(
        &self,
        user_id: Option<&str>,
    ) -> Result<GetNotesResponse, ApiClientError> {
        self.get_json("/api/notes", user_id).await
    }

    // ------------------------------------------------------------------------
    // Flashcards
    // ------------------------------------------------------------------------

    /// Generate and persist flashcards from notes text.
    pub async fn generate_flashcards(
        &self,
        notes: &str,
        difficulty: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<GenerateFlashcardsResponse, ApiClientError> {
        let req = GenerateFlashcardsRequest {
            notes: notes.to_string(),
            difficulty: difficulty.map(str::to_string),
            user_id: user_id.map(str::to_string),
        };
        self.post_json("/api/generate-flashcards", &req).await
    }

    /// List all stored flashcards for a user.
    pub async fn get_flashcards(
        &self,
        user_id: Option<&str>,
    ) -> Result<ListFlashcardsResponse, ApiClientError> {
        self.get_json("/api/flashcards", user_id).await
    }

    // ------------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------------

    /// Generate and persist quiz items from notes text.
    pub async fn generate_quiz(
        &self,
        notes: &str,
        difficulty: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<GenerateQuizResponse, ApiClientError> {
        let req = GenerateQuizRequest {
            notes: notes.to_string(),
            difficulty: difficulty.map(str::to_string),
            user_id: user_id.map(str::to_string),
        };
        self.post_json("/api/generate-quiz", &req).await
    }

    /// List all stored quiz items for a user.
    pub async fn get_quiz(
        &self,
        user_id: Option<&str>,
    ) -> Result<ListQuizzesResponse, ApiClientError> {
        self.get_json("/api/quiz", user_id).await
    }

    /// Submit an answer for a quiz item and receive the verdict.
    pub async fn submit_quiz_answer(
        &self,
        quiz_id: Uuid,
        user_answer: i32,
        user_id: Option<&str>,
    ) -> Result<SubmitAnswerResponse, ApiClientError> {
        let req = SubmitAnswerRequest {
            quiz_id,
            user_answer,
            user_id: user_id.map(str::to_string),
        };
        self.post_json("/api/quiz/submit", &req).await
    }

    // ------------------------------------------------------------------------
    // Health
    // ------------------------------------------------------------------------

    /// Liveness probe; returns the literal "pong".
    pub async fn ping(&self) -> Result<String, ApiClientError> {
        let url = format!("{}/health/ping", self.base_url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}",
                status.as_u16()
            )))
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    async fn get_json<T>(&self, path: &str, user_id: Option<&str>) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if let Some(user_id) = user_id {
            request = request.query(&[("userId", user_id)]);
        }
        let response = request.send().await?;
        parse_response(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).json(body).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let text = response.text().await?;
        Err(error_from_body(status.as_u16(), &text))
    }
}

/// Decode an error response body into an ApiClientError.
fn error_from_body(status: u16, text: &str) -> ApiClientError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => ApiClientError::Api {
            status,
            message: body.error,
        },
        Err(_) => ApiClientError::Api {
            status,
            message: text.to_string(),
        },
    }
}
