//! Boundary to text extraction.
//!
//! Binary formats (PDF, DOC/DOCX) are extracted by an external service; this
//! crate only reads plain-text files itself. Failures never abort
//! classification: callers substitute [`EXTRACTION_PLACEHOLDER`].
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Text classified in place of content that could not be extracted.
pub const EXTRACTION_PLACEHOLDER: &str = "Unsupported or error extracting content";

/// Extensions read directly as UTF-8 text.
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "csv", "tsv", "json", "xml", "html", "htm", "log", "eml",
];

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file type: {}", path.display())]
    Unsupported { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8 text: {}", path.display())]
    InvalidUtf8 { path: PathBuf },
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Reads files whose extension is in [`PLAIN_TEXT_EXTENSIONS`].
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn supports(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()))
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        if !Self::supports(path) {
            return Err(ExtractError::Unsupported {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| ExtractError::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    }
}

/// Extracted text and whether extraction succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub text_extracted: bool,
}

/// Runs `extractor`, falling back to [`EXTRACTION_PLACEHOLDER`] on error.
pub fn extract_or_placeholder(extractor: &dyn TextExtractor, path: &Path) -> Extraction {
    match extractor.extract(path) {
        Ok(text) => Extraction {
            text,
            text_extracted: true,
        },
        Err(e) => {
            warn!(error = %e, "Text extraction failed, classifying placeholder");
            Extraction {
                text: EXTRACTION_PLACEHOLDER.to_string(),
                text_extracted: false,
            }
        }
    }
}
