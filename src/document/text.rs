// src/document/text.rs
use std::fs;
use std::path::Path;
use crate::utils::error::ExtractError;

/// Plain text is read verbatim, no normalization.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let content = fs::read_to_string(path)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        let raw = "  Jane Roe  \r\n\n\tGender: Female\n";
        fs::write(&path, raw).unwrap();

        assert_eq!(extract_text(&path).unwrap(), raw);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = extract_text(Path::new("/nonexistent/cv.txt")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
