//! Note-related API types

use serde::{Deserialize, Serialize};

/// Request body for POST /api/notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SaveNotesRequest {
    /// Free-text study notes. Defaults to empty so that an absent field
    /// reaches the handler's own validation (HTTP 400) instead of being
    /// rejected by the JSON extractor.
    #[serde(default)]
    pub notes: String,
    /// Owner of the notes; defaults to "1" when absent
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response body for POST /api/notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SaveNotesResponse {
    pub success: bool,
    pub message: String,
    /// Character count of the saved text
    pub notes_length: usize,
}

/// Query parameters for the GET endpoints that take an optional `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response body for GET /api/notes.
///
/// Always succeeds; a missing row (or any lookup failure) degrades to an
/// empty string rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GetNotesResponse {
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_camel_case() {
        let req: SaveNotesRequest =
            serde_json::from_str(r#"{"notes":"Mitochondria.","userId":"7"}"#).unwrap();
        assert_eq!(req.notes, "Mitochondria.");
        assert_eq!(req.user_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_save_request_user_id_optional() {
        let req: SaveNotesRequest = serde_json::from_str(r#"{"notes":"x"}"#).unwrap();
        assert_eq!(req.user_id, None);
    }

    #[test]
    fn test_save_response_wire_shape() {
        let resp = SaveNotesResponse {
            success: true,
            message: "Notes saved".to_string(),
            notes_length: 12,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"notesLength\":12"));
        assert!(json.contains("\"success\":true"));
    }
}
