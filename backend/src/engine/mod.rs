//! OCR engines.
//!
//! The service talks to engines through the [`OcrEngine`] trait. The default
//! implementation, [`TesseractEngine`], runs the `tesseract` command line
//! tool on a prepared PNG file.

use std::path::Path;
use std::process::Command;

use crate::config::ServiceConfig;
use crate::error::{EngineError, EngineResult};

/// Trait that all OCR engines must implement.
///
/// Calls are blocking; callers run them on the blocking thread pool.
pub trait OcrEngine: Send + Sync {
    /// Engine identifier used in logs.
    fn name(&self) -> &'static str;

    /// Recognition language, if the engine has one.
    fn language(&self) -> Option<&str> {
        None
    }

    /// Extract raw text from the image at `image_path`.
    fn recognize(&self, image_path: &Path) -> EngineResult<String>;
}

/// Tesseract CLI wrapper: `tesseract <image> stdout -l <language>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesseractEngine {
    program: String,
    language: String,
}

impl TesseractEngine {
    pub fn new(program: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.tesseract_bin, &config.language)
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn language(&self) -> Option<&str> {
        Some(self.language.as_str())
    }

    fn recognize(&self, image_path: &Path) -> EngineResult<String> {
        let output = Command::new(&self.program)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Collapse engine output to a single line.
///
/// Lines are trimmed, blank ones dropped, the rest joined with one space.
pub fn join_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("你好\n\n  世界  \n\x0c"), "你好 世界");
        assert_eq!(join_lines(" \n\t\n"), "");
        assert_eq!(join_lines("single"), "single");
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let engine = TesseractEngine::new("/nonexistent/tesseract-binary", "eng");
        let result = engine.recognize(Path::new("image.png"));
        assert!(matches!(result, Err(EngineError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_line_shape() {
        // `echo` prints back the arguments it was given
        let engine = TesseractEngine::new("echo", "chi_sim");
        let text = engine.recognize(Path::new("/tmp/page.png")).unwrap();
        assert_eq!(text, "/tmp/page.png stdout -l chi_sim\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_binary_is_reported() {
        let engine = TesseractEngine::new("false", "eng");
        let result = engine.recognize(Path::new("image.png"));
        assert!(matches!(result, Err(EngineError::Failed { .. })));
    }

    #[test]
    fn test_from_config() {
        let config = ServiceConfig {
            language: "eng+chi_sim".into(),
            ..ServiceConfig::default()
        };
        let engine = TesseractEngine::from_config(&config);
        assert_eq!(engine.language(), Some("eng+chi_sim"));
        assert_eq!(engine.name(), "tesseract");
    }
}
