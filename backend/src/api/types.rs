//! REST API types for frontend integration.
//!
//! Field names match what the upload page expects:
//! `{ "results": [{ "filename", "message" | "error" }], "error"? }`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// OCR outcome for one uploaded file.
///
/// Exactly one of `message` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Original filename sent by the client
    pub filename: String,

    /// Recognized text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Why this file produced no text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEntry {
    pub fn text(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Response body of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// One entry per uploaded file, in upload order
    pub results: Vec<ResultEntry>,

    /// Batch-level error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn new(results: Vec<ResultEntry>) -> Self {
        Self { results, error: None }
    }
}

/// Body for rejected requests, same shape as a normal response.
pub fn error_response(message: &str) -> Value {
    json!({
        "results": [],
        "error": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serialization_omits_unset_fields() {
        let ok = serde_json::to_value(ResultEntry::text("a.png", "HELLO")).unwrap();
        assert_eq!(ok, json!({"filename": "a.png", "message": "HELLO"}));

        let failed = serde_json::to_value(ResultEntry::failed("b.png", "Error processing image.")).unwrap();
        assert_eq!(failed, json!({"filename": "b.png", "error": "Error processing image."}));
    }

    #[test]
    fn test_response_serialization() {
        let response = UploadResponse::new(vec![ResultEntry::text("a.png", "HELLO")]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"results": [{"filename": "a.png", "message": "HELLO"}]}));
    }

    #[test]
    fn test_error_response_shape() {
        let value = error_response("No files provided");
        assert_eq!(value["results"], json!([]));
        assert_eq!(value["error"], "No files provided");

        let parsed: UploadResponse = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("No files provided"));
    }
}
