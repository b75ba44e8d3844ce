// src/document/mod.rs
pub mod docx;
pub mod pdf;
pub mod text;

use std::fmt;
use std::path::Path;
use serde::Serialize;
use crate::utils::error::ExtractError;

/// Document types the extractor understands, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Dispatches on the path suffix (case-insensitive). Anything else is `UnsupportedFormat`.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Txt),
            _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        };
        f.write_str(name)
    }
}

/// Normalized text of one document. Line breaks are significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlob {
    text: String,
}

impl TextBlob {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extracts the text blob for a document, picking the reader from its extension.
/// The file is opened read-only and closed before this returns.
pub fn extract_text(path: &Path) -> Result<(DocumentKind, TextBlob), ExtractError> {
    let kind = DocumentKind::from_path(path)?;
    tracing::debug!("Extracting {} text from {}", kind, path.display());

    let text = match kind {
        DocumentKind::Pdf => pdf::extract_text(path)?,
        DocumentKind::Docx => docx::extract_text(path)?,
        DocumentKind::Txt => text::extract_text(path)?,
    };

    tracing::info!("Extracted {} bytes of text from {}", text.len(), path.display());
    Ok((kind, TextBlob::new(text)))
}
