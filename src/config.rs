// src/config.rs
//! Skill vocabulary configuration.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::error::ConfigError;

/// Environment variable consulted when no vocabulary file is passed on the command line.
pub const SKILLS_FILE_ENV: &str = "RESUME_SKILLS_FILE";

/// Tokens recognised out of the box, in match priority order.
const DEFAULT_SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "Bootstrap",
    "C#",
    "ASP.NET",
    "ADO.NET",
    "MVC",
    "SQL Server",
    "Entity Framework",
    "LINQ",
];

/// One recognised skill: its canonical name and the tokens that count as it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Empty means "match the canonical name only".
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl SkillEntry {
    /// Tokens to look for; the canonical name when no aliases are configured.
    pub fn tokens(&self) -> Vec<&str> {
        if self.aliases.is_empty() {
            vec![self.name.as_str()]
        } else {
            self.aliases.iter().map(String::as_str).collect()
        }
    }
}

/// Closed vocabulary of skills the skills extractor will report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SKILLS
                .iter()
                .map(|name| SkillEntry { name: name.to_string(), aliases: Vec::new() })
                .collect(),
        }
    }
}

impl SkillVocabulary {
    pub fn new(entries: Vec<SkillEntry>) -> Result<Self, ConfigError> {
        let vocabulary = Self { entries };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    /// Parses a JSON array of `{ "name": ..., "aliases": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<SkillEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let vocabulary = Self::from_json(&json)?;
        tracing::info!("Loaded {} skills from {}", vocabulary.entries.len(), path.display());
        Ok(vocabulary)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::InvalidVocabulary("no skills defined".to_string()));
        }
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::InvalidVocabulary("skill with empty name".to_string()));
            }
            if entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(ConfigError::InvalidVocabulary(format!("skill '{}' has an empty alias", entry.name)));
            }
        }
        Ok(())
    }
}

/// Resolves the vocabulary: explicit path, then `RESUME_SKILLS_FILE`, then the built-in list.
pub fn load_skill_vocabulary(explicit: Option<&Path>) -> Result<SkillVocabulary, ConfigError> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var(SKILLS_FILE_ENV).ok().filter(|v| !v.is_empty()).map(PathBuf::from),
    };

    match path {
        Some(path) => SkillVocabulary::from_file(&path),
        None => {
            tracing::debug!("Using built-in skill vocabulary");
            Ok(SkillVocabulary::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_order() {
        let vocabulary = SkillVocabulary::default();
        let names: Vec<&str> = vocabulary.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, DEFAULT_SKILLS);
        assert_eq!(vocabulary.entries()[0].tokens(), vec!["HTML"]);
    }

    #[test]
    fn test_from_json_with_aliases() {
        let json = r#"[
            {"name": "JavaScript", "aliases": ["JavaScript", "JS", "ECMAScript"]},
            {"name": "Rust"}
        ]"#;
        let vocabulary = SkillVocabulary::from_json(json).unwrap();
        assert_eq!(vocabulary.entries().len(), 2);
        assert_eq!(vocabulary.entries()[0].tokens(), vec!["JavaScript", "JS", "ECMAScript"]);
        assert_eq!(vocabulary.entries()[1].tokens(), vec!["Rust"]);
    }

    #[test]
    fn test_rejects_invalid_vocabularies() {
        assert!(matches!(SkillVocabulary::from_json("[]"), Err(ConfigError::InvalidVocabulary(_))));
        assert!(matches!(
            SkillVocabulary::from_json(r#"[{"name": "  "}]"#),
            Err(ConfigError::InvalidVocabulary(_))
        ));
        assert!(matches!(
            SkillVocabulary::from_json(r#"[{"name": "Go", "aliases": [""]}]"#),
            Err(ConfigError::InvalidVocabulary(_))
        ));
        assert!(matches!(SkillVocabulary::from_json("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        fs::write(&path, r#"[{"name": "Kubernetes", "aliases": ["Kubernetes", "k8s"]}]"#).unwrap();

        let vocabulary = load_skill_vocabulary(Some(&path)).unwrap();
        assert_eq!(vocabulary.entries()[0].name, "Kubernetes");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_skill_vocabulary(Some(Path::new("/nonexistent/skills.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
