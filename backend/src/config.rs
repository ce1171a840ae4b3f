//! Service configuration.
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary) and can be overridden by command line flags.
//!
//! | Variable | Default |
//! |---|---|
//! | `OCR_PORT` | `8000` |
//! | `OCR_ALLOWED_ORIGIN` | `http://localhost:3000` |
//! | `OCR_LANG` | `chi_sim` |
//! | `TESSERACT_BIN` | `tesseract` |
//! | `OCR_MAX_UPLOAD_BYTES` | 50 MiB |

use std::env;

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_LANGUAGE: &str = "chi_sim";
pub const DEFAULT_TESSERACT_BIN: &str = "tesseract";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Port to listen on
    pub port: u16,
    /// Front-end origin allowed by CORS
    pub allowed_origin: String,
    /// Tesseract language code(s), e.g. `chi_sim` or `eng+chi_sim`
    pub language: String,
    /// Path or name of the tesseract binary
    pub tesseract_bin: String,
    /// Request body limit for `/upload`
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            tesseract_bin: DEFAULT_TESSERACT_BIN.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServerResult<Self> {
        let defaults = Self::default();

        let port = match lookup("OCR_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("OCR_PORT must be a port number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("OCR_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ServerError::Config(format!("OCR_MAX_UPLOAD_BYTES must be a byte count, got '{}'", raw))
            })?,
            None => defaults.max_upload_bytes,
        };

        Ok(Self {
            port,
            allowed_origin: lookup("OCR_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            language: lookup("OCR_LANG").unwrap_or(defaults.language),
            tesseract_bin: lookup("TESSERACT_BIN").unwrap_or(defaults.tesseract_bin),
            max_upload_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("OCR_PORT", "9001"),
            ("OCR_LANG", "eng"),
            ("OCR_MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9001);
        assert_eq!(config.language, "eng");
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.tesseract_bin, "tesseract");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServiceConfig::from_lookup(lookup_from(&[("OCR_PORT", "eighty")]));
        assert!(matches!(result, Err(ServerError::Config(msg)) if msg.contains("eighty")));
    }
}
