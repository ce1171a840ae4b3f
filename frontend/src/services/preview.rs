//! Object URLs for image thumbnails.

use web_sys::{File, Url};

use crate::{AppError, AppResult};

/// A `blob:` URL pointing at one selected file.
///
/// The URL is revoked when the handle is dropped, so replacing the
/// selection or tearing down the view releases the underlying blob.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewUrl {
    url: String,
}

impl PreviewUrl {
    pub fn create(file: &File) -> AppResult<Self> {
        Url::create_object_url_with_blob(file)
            .map(|url| Self { url })
            .map_err(|e| AppError::Browser(format!("Failed to create preview for {}: {:?}", file.name(), e)))
    }

    /// Like [`PreviewUrl::create`], logging failures instead of returning them.
    pub fn create_or_log(file: &File) -> Option<Self> {
        match Self::create(file) {
            Ok(preview) => Some(preview),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("Failed to revoke {}: {:?}", self.url, e);
        }
    }
}
