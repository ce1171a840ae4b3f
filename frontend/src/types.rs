//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - OCR service response structures
//! - **State Types** - Upload lifecycle
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// OCR outcome for one submitted image.
///
/// `message` is usually a string. The service may also return structured
/// data there, or omit it and report a per-file `error` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Original filename of the submitted image
    pub filename: String,
    /// Recognized text (or structured payload)
    #[serde(default)]
    pub message: Value,
    /// Per-file failure reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultEntry {
    /// Build a plain textual entry.
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: Value::String(message.into()),
            error: None,
        }
    }

    /// Text shown in the results table and copied to the clipboard.
    ///
    /// Strings are rendered verbatim, anything else in its JSON form.
    pub fn display_message(&self) -> String {
        match (&self.message, &self.error) {
            (Value::String(text), _) => text.clone(),
            (Value::Null, Some(error)) => error.clone(),
            (Value::Null, None) => String::new(),
            (other, _) => other.to_string(),
        }
    }
}

/// Response body of `POST /upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// One entry per submitted image, in service order
    pub results: Vec<ResultEntry>,
    /// Batch-level failure reported alongside a success status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// State Types
// =============================================================================

/// Lifecycle of the upload view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Uploading,
    /// The service answered with a success status
    Done,
    /// Transport failure, timeout or non-success status
    Failed,
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. None of these reach the
/// user as text; they are logged to the browser console.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Parse(String),

    /// No response within the configured bound.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// Request aborted by teardown.
    #[error("Request cancelled")]
    Cancelled,

    /// Clipboard write rejected.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A browser API was unavailable or failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
