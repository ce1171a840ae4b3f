//! Clipboard access through `navigator.clipboard`.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".to_string()))?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(AppError::Clipboard("Clipboard API unavailable".to_string()));
    }

    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?
        .dyn_into::<Function>()
        .map_err(|_| AppError::Clipboard("writeText is not a function".to_string()))?;

    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| AppError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))?;

    Ok(())
}

/// Blocking acknowledgment dialog.
pub fn acknowledge(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Could not show alert: {:?}", e);
        }
    }
}

fn js_error_message(error: &JsValue) -> String {
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| error.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
