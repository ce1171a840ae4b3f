//! Application configuration.
//!
//! Centralized configuration for the OCR upload frontend.
//! The OCR service location is fixed at build time; there is no runtime
//! configuration source.

/// OCR service base URL.
///
/// The service answering multipart uploads with recognized text.
pub const OCR_SERVICE_URL: &str = "http://localhost:8000";

/// Path of the upload endpoint on the OCR service.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart field name shared by every submitted image.
pub const UPLOAD_FIELD: &str = "files";

/// File picker filter hint.
///
/// Only a hint for the platform dialog, nothing is enforced.
pub const ACCEPTED_TYPES: &str = "image/*";

/// Upper bound for a single upload round trip (in milliseconds).
///
/// 2 minutes, OCR on large batches is slow.
pub const REQUEST_TIMEOUT_MS: u32 = 120_000;

/// Application name, used as the document title.
pub const APP_NAME: &str = "OCR Image Upload";

/// Fallback shown when there is nothing to display.
pub const NO_RESULTS_TEXT: &str = "No results to display.";

/// Acknowledgment shown after a successful clipboard write.
pub const COPY_ACK_TEXT: &str = "Messages copied to clipboard!";

/// Full URL of the upload endpoint.
pub fn upload_url() -> String {
    format!("{}{}", OCR_SERVICE_URL, UPLOAD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url(), "http://localhost:8000/upload");
    }
}
