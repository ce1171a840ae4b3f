//! # OCR Service - text recognition over HTTP
//!
//! Receives images as `multipart/form-data`, prepares them for recognition
//! and returns the extracted text per file as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Multipart  │────▶│ Preprocess  │────▶│   Engine    │────▶│    JSON     │
//! │  `files`    │     │ (×2, ctr)   │     │ (tesseract) │     │  results[]  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ocr_service::{process_batch, TesseractEngine, UploadedImage};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = Arc::new(TesseractEngine::new("tesseract", "eng"));
//!     let bytes = std::fs::read("scan.png").unwrap();
//!     let response = process_batch(engine, vec![UploadedImage::new("scan.png", bytes)]).await;
//!     println!("{}", serde_json::to_string_pretty(&response).unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Environment configuration
//! - [`preprocess`] - Decoding, upscaling, contrast enhancement
//! - [`engine`] - OCR engine trait and tesseract implementation
//! - [`pipeline`] - Per-file recognition and batch processing
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Image preparation
pub mod preprocess;

// Recognition
pub mod engine;
pub mod pipeline;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    EngineError,
    ImageError,
    OcrError,
    ServerError,
};

pub use config::ServiceConfig;

pub use engine::{OcrEngine, TesseractEngine};

pub use pipeline::{
    process_batch,
    process_upload,
    recognize_image,
    UploadedImage,
};

pub use api::types::{
    ResultEntry,
    UploadResponse,
    error_response,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server, AppState};
}
