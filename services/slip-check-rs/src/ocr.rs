//! Text extraction from slip images.
//!
//! OCR is optional: when the engine is missing or fails the extractor yields
//! empty text and scoring treats that as a weak slip, not an error.

use std::{
    path::Path,
    process::{Command, Stdio},
    sync::OnceLock,
};
use tracing::debug;

pub trait TextExtractor {
    /// Whether extraction can run in this environment.
    fn is_available(&self) -> bool;

    /// Extracted text, or an empty string on any failure.
    fn extract_text(&self, image: &Path) -> String;
}

/// Runs the `tesseract` command-line tool, printing recognized text to stdout.
pub struct TesseractExtractor {
    binary: String,
    available: OnceLock<bool>,
}

impl TesseractExtractor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            available: OnceLock::new(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl TextExtractor for TesseractExtractor {
    fn is_available(&self) -> bool {
        *self.available.get_or_init(|| {
            let available = Command::new(&self.binary)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|status| status.success())
                .unwrap_or(false);
            debug!(binary = %self.binary, available, "OCR availability check");
            available
        })
    }

    fn extract_text(&self, image: &Path) -> String {
        if !self.is_available() {
            return String::new();
        }

        // `tesseract <image> stdout` writes the text to stdout instead of a file
        let output = Command::new(&self.binary)
            .arg(image)
            .arg("stdout")
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout).into_owned(),
            Ok(output) => {
                debug!(
                    image = %image.display(),
                    code = ?output.status.code(),
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "OCR failed"
                );
                String::new()
            }
            Err(e) => {
                debug!(image = %image.display(), "OCR could not run: {}", e);
                String::new()
            }
        }
    }
}
