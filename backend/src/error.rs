//! Error types for the OCR service.
//!
//! - [`ImageError`] - decoding and preprocessing failures
//! - [`EngineError`] - OCR engine failures
//! - [`OcrError`] - per-file recognition errors
//! - [`ServerError`] - HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Image Errors
// =============================================================================

/// Errors while decoding or preparing an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Bytes are not a supported image, or encoding failed.
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Image has no pixels.
    #[error("Image is empty")]
    Empty,

    /// Temporary file could not be written.
    #[error("Failed to write temporary image: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Engine Errors
// =============================================================================

/// Errors from the OCR engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine binary could not be started.
    #[error("Failed to start OCR engine '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine ran but reported a failure.
    #[error("OCR engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// Engine output was not valid UTF-8.
    #[error("OCR engine produced invalid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

// =============================================================================
// Recognition Errors (per file)
// =============================================================================

/// Failure to recognize a single uploaded file.
#[derive(Debug, Error)]
pub enum OcrError {
    /// Image error.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Engine error.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Blocking task panicked or was cancelled.
    #[error("Recognition task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Socket error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for per-file recognition.
pub type OcrResult<T> = Result<T, OcrError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
