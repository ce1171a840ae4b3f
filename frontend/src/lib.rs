//! OCR Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading images to an OCR service and
//! reviewing the recognized text next to each image.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title)                                            │
//! │  └── UploadView                                              │
//! │      ├── file picker + submit                                │
//! │      └── ProcessingIndicator | "No results" | ResultsTable   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ResultEntry, UploadResponse, AppError)
//! - [`state`] - Upload view state machine, browser independent
//! - [`components`] - UI components (Hero, UploadView, ResultsTable)
//! - [`services`] - OCR upload, preview URLs, clipboard

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    ResultEntry, UploadResponse,
    // State
    UploadState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by the `ocr-upload-frontend` binary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadView/>
        </div>
    }
}
