//! Per-upload recognition pipeline.
//!
//! ```text
//! bytes ──▶ decode ──▶ preprocess ──▶ temp PNG ──▶ engine ──▶ join lines
//! ```
//!
//! A failing file never fails the batch: it becomes an entry with an
//! `error` field and the next file is processed.

use std::sync::Arc;

use crate::api::types::{ResultEntry, UploadResponse};
use crate::engine::{join_lines, OcrEngine};
use crate::error::{ImageError, OcrError, OcrResult};
use crate::preprocess::{decode, preprocess, save_png};

/// Message for images where the engine found nothing.
pub const NO_TEXT_MESSAGE: &str = "No text detected.";

/// Same, when recognizing Chinese.
pub const CHINESE_NO_TEXT_MESSAGE: &str = "No Chinese text detected.";

/// Error reported to clients for a file that could not be processed.
pub const FAILURE_MESSAGE: &str = "Error processing image.";

/// One file received from a client.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Recognize the text in one encoded image. Blocking.
///
/// The intermediate PNG is removed when this returns.
pub fn recognize_image(engine: &dyn OcrEngine, bytes: &[u8]) -> OcrResult<String> {
    let image = decode(bytes)?;
    let prepared = preprocess(&image);

    let temp = tempfile::Builder::new()
        .prefix("ocr-")
        .suffix(".png")
        .tempfile()
        .map_err(ImageError::from)?;
    save_png(&prepared, temp.path())?;

    let raw = engine.recognize(temp.path())?;
    Ok(join_lines(&raw))
}

/// Empty-result message for an engine language such as `chi_sim` or `eng+chi_tra`.
pub fn no_text_message(language: Option<&str>) -> &'static str {
    let chinese = language
        .map(|lang| lang.split('+').any(|part| part.starts_with("chi_")))
        .unwrap_or(false);
    if chinese {
        CHINESE_NO_TEXT_MESSAGE
    } else {
        NO_TEXT_MESSAGE
    }
}

/// Recognize one upload on the blocking pool and turn the outcome into an entry.
pub async fn process_upload(engine: Arc<dyn OcrEngine>, upload: UploadedImage) -> ResultEntry {
    let UploadedImage { filename, bytes } = upload;
    let empty_message = no_text_message(engine.language());

    let outcome = tokio::task::spawn_blocking(move || recognize_image(engine.as_ref(), &bytes))
        .await
        .map_err(OcrError::from)
        .and_then(|result| result);

    match outcome {
        Ok(text) if text.is_empty() => {
            tracing::info!(filename = %filename, "No text detected");
            ResultEntry::text(filename, empty_message)
        }
        Ok(text) => {
            tracing::info!(filename = %filename, chars = text.chars().count(), "Detected text: {}", text);
            ResultEntry::text(filename, text)
        }
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "Error processing image");
            ResultEntry::failed(filename, FAILURE_MESSAGE)
        }
    }
}

/// Process every upload in order.
pub async fn process_batch(engine: Arc<dyn OcrEngine>, uploads: Vec<UploadedImage>) -> UploadResponse {
    let mut results = Vec::with_capacity(uploads.len());
    for upload in uploads {
        results.push(process_upload(engine.clone(), upload).await);
    }
    UploadResponse::new(results)
}
