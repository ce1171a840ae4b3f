//! HTTP Server for the OCR service.
//!
//! # API Endpoints
//!
//! | Method | Path       | Description                              |
//! |--------|------------|------------------------------------------|
//! | GET    | `/health`  | Health check                             |
//! | POST   | `/upload`  | Recognize text in one or more images     |

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use super::types::{error_response, UploadResponse};
use crate::config::ServiceConfig;
use crate::engine::{OcrEngine, TesseractEngine};
use crate::error::{ServerError, ServerResult};
use crate::pipeline::{process_batch, UploadedImage};

/// Multipart field carrying the images.
pub const UPLOAD_FIELD: &str = "files";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn OcrEngine>,
}

impl AppState {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }
}

/// Build the application router.
pub fn router(state: AppState, config: &ServiceConfig) -> ServerResult<Router> {
    let origin = HeaderValue::from_str(&config.allowed_origin).map_err(|_| {
        ServerError::Config(format!("Invalid allowed origin: {}", config.allowed_origin))
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Ok(Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/upload", post(upload_images))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .with_state(state))
}

/// Start the HTTP server
pub async fn start_server(config: ServiceConfig) -> ServerResult<()> {
    let engine = TesseractEngine::from_config(&config);
    tracing::info!(
        engine = engine.name(),
        language = engine.language().unwrap_or("-"),
        "OCR engine ready"
    );

    let app = router(AppState::new(Arc::new(engine)), &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 OCR service running on http://localhost:{}", config.port);
    tracing::info!("   POST /upload - Recognize images (field `{}`)", UPLOAD_FIELD);
    tracing::info!("   GET  /health - Health check");
    tracing::info!("   CORS origin: {}", config.allowed_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ocr-service",
        "version": env!("CARGO_PKG_VERSION"),
        "engine": state.engine.name(),
        "endpoints": {
            "upload": "POST /upload"
        }
    }))
}

/// Upload endpoint: every `files` part is one image.
async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<Value>)> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (e.status(), Json(error_response(&format!("Multipart error: {}", e))))
    })? {
        let name = field.name().unwrap_or("").to_string();
        if name != UPLOAD_FIELD {
            tracing::debug!(field = %name, "Ignoring unexpected multipart field");
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            (e.status(), Json(error_response(&format!("Read error: {}", e))))
        })?;
        uploads.push(UploadedImage::new(filename, bytes.to_vec()));
    }

    if uploads.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(error_response("No files provided"))));
    }

    let total_bytes: usize = uploads.iter().map(|u| u.bytes.len()).sum();
    tracing::info!(files = uploads.len(), bytes = total_bytes, "📄 New upload");

    let response = process_batch(state.engine.clone(), uploads).await;

    Ok(Json(response))
}
