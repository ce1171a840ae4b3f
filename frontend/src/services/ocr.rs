//! HTTP client for the OCR service.
//!
//! Sends every selected image in one `multipart/form-data` POST and waits
//! for the complete JSON answer. The request is bounded by a timeout and
//! carries an abort signal owned by the caller.

use futures::future::{select, Either};
use std::future::Future;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{AbortController, File, FormData};

use crate::config::{upload_url, REQUEST_TIMEOUT_MS, UPLOAD_FIELD};
use crate::{AppError, AppResult, UploadResponse};

/// Client for `POST /upload`.
#[derive(Clone, Debug)]
pub struct OcrClient {
    upload_url: String,
    timeout_ms: u32,
}

impl OcrClient {
    /// Client for the configured service.
    pub fn new() -> Self {
        Self {
            upload_url: upload_url(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    #[cfg(test)]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    #[cfg(test)]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Upload `files` and parse the service answer.
    ///
    /// The timeout covers the whole exchange, body included. On expiry the
    /// request is aborted and [`AppError::Timeout`] returned. Aborting
    /// `controller` from outside ends the request with [`AppError::Cancelled`].
    pub async fn upload(&self, files: &[File], controller: &AbortController) -> AppResult<UploadResponse> {
        let form_data = build_form(files)?;
        let signal = controller.signal();

        let request = Request::post(&self.upload_url)
            .abort_signal(Some(&signal))
            .body(form_data)
            .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

        log::info!("📤 Uploading {} image(s) to {}", files.len(), self.upload_url);

        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| AppError::Network(e.to_string()))?;

            if !response.ok() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(AppError::Status {
                    status: response.status(),
                    body,
                });
            }

            response
                .json::<UploadResponse>()
                .await
                .map_err(|e| AppError::Parse(e.to_string()))
        };

        let outcome = bounded(exchange, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await;

        match outcome {
            Err(AppError::Timeout(ms)) => {
                controller.abort();
                Err(AppError::Timeout(ms))
            }
            Err(e) => Err(cancelled_if_aborted(signal.aborted(), e)),
            Ok(response) => Ok(response),
        }
    }
}

impl Default for OcrClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Race `exchange` against `deadline`.
async fn bounded<T>(
    exchange: impl Future<Output = AppResult<T>>,
    deadline: impl Future<Output = ()>,
    timeout_ms: u32,
) -> AppResult<T> {
    match select(Box::pin(exchange), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(AppError::Timeout(timeout_ms)),
    }
}

/// Any failure after the caller aborted is a cancellation.
fn cancelled_if_aborted(aborted: bool, error: AppError) -> AppError {
    if aborted {
        AppError::Cancelled
    } else {
        error
    }
}

/// One part per file under the shared field name, keeping original filenames.
fn build_form(files: &[File]) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::Browser(format!("Failed to append {}: {:?}", file.name(), e)))?;
    }

    Ok(form_data)
}
