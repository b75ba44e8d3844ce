// src/storage/mod.rs
pub mod export;

use std::fs;
use std::path::{Path, PathBuf};
use crate::document::{DocumentKind, TextBlob};
use crate::resume::models::{PersonalDetails, StructuredRecord};
use crate::utils::error::StorageError;

pub use export::CsvExporter;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Per-document directory, `<base>/<stem>/`, created on demand.
    pub fn document_dir(&self, name: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(name);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Debug dump directory, `<base>/<stem>/debug/`, created on demand.
    pub fn debug_dir(&self, name: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(name)?.join("debug");
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the structured record as pretty JSON
    pub fn save_record(&self, name: &str, record: &StructuredRecord) -> Result<PathBuf, StorageError> {
        let file_path = self.document_dir(name)?.join(format!("{}.json", name));

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved record to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction run in JSON format
    pub fn save_record_metadata(
        &self,
        name: &str,
        source_path: &Path,
        kind: DocumentKind,
        text: &TextBlob,
        record: &StructuredRecord,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.document_dir(name)?.join(format!("{}_meta.json", name));

        let populated = record.personal_details.populated_fields();
        let metadata = serde_json::json!({
            "source_path": source_path.display().to_string(),
            "document_kind": kind,
            "text_length": text.len(),
            "personal_fields_populated": populated,
            "personal_fields_missing": PersonalDetails::FIELD_COUNT - populated,
            "skills_count": record.skills.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}

/// Storage name for a source document: its file stem, or `resume` when it has none.
pub fn record_name(source_path: &Path) -> String {
    source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("resume")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ResumeParser;

    fn sample_record() -> (TextBlob, StructuredRecord) {
        let text = TextBlob::new("Jane Roe\nEmail: jane@example.com\nTechnical Skills: HTML, CSS");
        let record = ResumeParser::default().parse_text(&text);
        (text, record)
    }

    #[test]
    fn test_save_record_layout() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("out")).unwrap();
        let (_, record) = sample_record();

        let path = storage.save_record("jane_cv", &record).unwrap();
        assert_eq!(path, dir.path().join("out/jane_cv/jane_cv.json"));

        let saved: StructuredRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, record);
    }

    #[test]
    fn test_save_record_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let (text, record) = sample_record();

        let path = storage
            .save_record_metadata("jane_cv", Path::new("in/jane_cv.txt"), DocumentKind::Txt, &text, &record)
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "jane_cv_meta.json");

        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(meta["document_kind"], "txt");
        assert_eq!(meta["text_length"], text.len());
        assert_eq!(meta["skills_count"], 2);
        // first name, last name, email
        assert_eq!(meta["personal_fields_populated"], 3);
        assert_eq!(meta["personal_fields_missing"], 6);
        assert!(chrono::DateTime::parse_from_rfc3339(meta["extraction_timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_debug_dir_is_nested_under_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let debug = storage.debug_dir("cv").unwrap();
        assert_eq!(debug, dir.path().join("cv").join("debug"));
        assert!(debug.is_dir());
    }

    #[test]
    fn test_record_name() {
        assert_eq!(record_name(Path::new("uploads/Jane Roe CV.pdf")), "Jane Roe CV");
        assert_eq!(record_name(Path::new("/")), "resume");
    }
}
