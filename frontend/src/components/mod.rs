//! UI Components for the OCR upload application.
//!
//! # Layout Components
//! - [`Hero`] - Page heading
//!
//! # Feature Components
//! - [`UploadView`] - File selection, upload and result display
//! - [`ResultsTable`] - Filename, thumbnail and recognized text per image
//! - [`ProcessingIndicator`] - Spinner while the service works

mod hero;
mod upload;
mod results;
mod progress;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use progress::*;
