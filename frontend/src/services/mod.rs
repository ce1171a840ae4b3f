//! Browser-side services.
//!
//! This module provides services for everything outside the component tree:
//!
//! # Services
//!
//! - [`ocr`] - multipart upload to the OCR service
//! - [`preview`] - scoped object URLs for image thumbnails
//! - [`clipboard`] - clipboard write and acknowledgment
//!
//! # JavaScript Bindings
//!
//! The clipboard goes through `js_sys::Reflect` so no unstable `web-sys`
//! API is required.

pub mod ocr;
pub mod preview;
pub mod clipboard;

pub use ocr::*;
pub use preview::*;
