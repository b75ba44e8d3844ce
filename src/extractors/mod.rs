// src/extractors/mod.rs
pub mod certifications;
pub mod education;
pub mod experience;
pub mod personal;
pub mod profiles;
pub mod rules;
pub mod sections;
pub mod skills;

use regex::Regex;

// Re-export key extraction types for convenience
pub use education::EducationMatch;
pub use experience::ExperienceMatch;
pub use skills::SkillMatcher;

/// Header and label patterns highlighted in debug dumps, tagged by kind.
pub fn debug_patterns() -> Vec<(&'static Regex, &'static str)> {
    let mut patterns = vec![
        (&*sections::SKILLS_HEADER_RE, "skills"),
        (&*sections::CERTIFICATIONS_HEADER_RE, "certifications"),
        (&*education::TABLE_ROW_RE, "education"),
        (&*experience::ROLE_LINE_RE, "experience"),
    ];
    patterns.extend(personal::debug_patterns());
    patterns
}
