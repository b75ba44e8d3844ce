// src/extractors/skills.rs
use std::collections::HashMap;
use regex::{Regex, RegexBuilder};
use crate::config::SkillVocabulary;
use crate::utils::error::ConfigError;
use crate::extractors::sections::{section_body, Section};

/// Matches skill tokens from a closed vocabulary inside the skills section.
pub struct SkillMatcher {
    pattern: Regex,
    // lowercased token -> canonical skill name
    canonical: HashMap<String, String>,
}

impl SkillMatcher {
    /// Compiles the vocabulary into one whole-token, case-insensitive alternation.
    /// Tokens are tried in vocabulary order.
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self, ConfigError> {
        let mut canonical = HashMap::new();
        let mut alternatives = Vec::new();

        for entry in vocabulary.entries() {
            for token in entry.tokens() {
                canonical
                    .entry(token.to_lowercase())
                    .or_insert_with(|| entry.name.clone());
                alternatives.push(regex::escape(token));
            }
        }

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
            .case_insensitive(true)
            .build()
            // Every alternative is escaped, so the only way to fail is the size limit
            .map_err(|e| ConfigError::InvalidVocabulary(e.to_string()))?;

        Ok(Self { pattern, canonical })
    }

    /// Canonical names of every vocabulary token found in `text`, in order of appearance.
    pub fn match_tokens(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| self.canonical.get(&m.as_str().to_lowercase()).cloned())
            .collect()
    }

    /// Skills listed in the skills section; empty when there is no section or no known token.
    pub fn extract(&self, text: &str) -> Vec<String> {
        match section_body(text, Section::Skills) {
            Some(body) => self.match_tokens(body),
            None => {
                tracing::debug!("skills: no skills section found");
                Vec::new()
            }
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(&SkillVocabulary::default()).expect("built-in skill vocabulary compiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkillEntry;

    #[test]
    fn test_only_vocabulary_tokens_are_reported() {
        let matcher = SkillMatcher::default();
        let text = "Technical Skills: Skilled in HTML, Cooking, and SQL Server";
        assert_eq!(matcher.extract(text), vec!["HTML", "SQL Server"]);
    }

    #[test]
    fn test_matches_case_insensitively_with_canonical_output() {
        let matcher = SkillMatcher::default();
        let text = "Skill Set\njavascript, asp.net, Entity framework\nEducation\nCSS";
        assert_eq!(matcher.extract(text), vec!["JavaScript", "ASP.NET", "Entity Framework"]);
    }

    #[test]
    fn test_whole_tokens_only() {
        let matcher = SkillMatcher::default();
        // "HTML5" and "LINQPad" are not whole-token matches
        assert!(matcher.extract("Skills & Abilities: HTML5, LINQPad").is_empty());
    }

    #[test]
    fn test_symbol_suffixed_tokens_need_a_following_word_character() {
        let matcher = SkillMatcher::default();
        // Word-boundary semantics: "C#" only matches when a word character follows it.
        assert!(matcher.extract("Technical Skills: C#, MVC").contains(&"MVC".to_string()));
        assert!(!matcher.extract("Technical Skills: C#, MVC").contains(&"C#".to_string()));
    }

    #[test]
    fn test_no_section_means_no_skills() {
        let matcher = SkillMatcher::default();
        assert!(matcher.extract("I know HTML and CSS").is_empty());
    }

    #[test]
    fn test_custom_vocabulary_aliases() {
        let vocabulary = SkillVocabulary::new(vec![
            SkillEntry { name: "Kubernetes".into(), aliases: vec!["Kubernetes".into(), "k8s".into()] },
            SkillEntry { name: "Go".into(), aliases: vec![] },
        ])
        .unwrap();
        let matcher = SkillMatcher::new(&vocabulary).unwrap();
        assert_eq!(
            matcher.extract("Technical Skills - K8S, C++ and Go"),
            vec!["Kubernetes", "Go"]
        );
    }
}
