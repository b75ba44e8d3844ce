// src/extractors/experience.rs
use once_cell::sync::Lazy;
use regex::Regex;
use crate::extractors::rules::{group, FnRule, PatternRule, RuleChain};
use crate::extractors::sections::bullet_points;
use crate::resume::models::NOT_PROVIDED;

/// One experience entry as found in the text, before duration splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceMatch {
    pub job_title: String,
    pub company: String,
    /// Free-form, usually `From - To`.
    pub duration: String,
    pub description: Vec<String>,
}

impl ExperienceMatch {
    fn missing() -> Self {
        Self {
            job_title: NOT_PROVIDED.to_string(),
            company: NOT_PROVIDED.to_string(),
            duration: NOT_PROVIDED.to_string(),
            description: Vec::new(),
        }
    }
}

// "Experience: Role - Company (Duration)"; the separator may also be an en or em dash.
pub static ROLE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Internship|Experience|Work History)[\s:-]*([^\n—–-]+)[—–-]\s*([^\n(]+?)\s*\((.*?)\)")
        .expect("Failed to compile ROLE_LINE_RE")
});

static EXPERIENCE_LAYOUTS: Lazy<RuleChain<Vec<ExperienceMatch>>> = Lazy::new(|| {
    RuleChain::new("experience")
        .rule(FnRule::new("role - company (duration)", role_lines))
        .rule(PatternRule::new(
            "project template",
            r"(?s)Project\s*:\s*(.+?)\s*Environment\s*:\s*(.+?)\s*Project Description\s*:\s*(.+?)\n\w",
            |c| {
                Some(vec![ExperienceMatch {
                    job_title: format!("Project: {}", group(c, 1)?),
                    company: "Personal Project".to_string(),
                    duration: "Not Specified".to_string(),
                    description: vec![group(c, 3)?],
                }])
            },
        ))
});

/// At most one experience entry; one sentinel entry when no layout matches.
pub fn extract_experience(text: &str) -> Vec<ExperienceMatch> {
    let mut entries = EXPERIENCE_LAYOUTS
        .first_match(text)
        .unwrap_or_else(|| vec![ExperienceMatch::missing()]);
    entries.truncate(1);
    entries
}

fn role_lines(text: &str) -> Option<Vec<ExperienceMatch>> {
    let mut matches = ROLE_LINE_RE.captures_iter(text).peekable();
    matches.peek()?;

    // Bullets are taken from the whole document, not just the entry
    let description = bullet_points(text);

    Some(
        matches
            .map(|c| ExperienceMatch {
                job_title: group(&c, 2).unwrap_or_default(),
                company: group(&c, 3).unwrap_or_default(),
                duration: group(&c, 4).unwrap_or_default(),
                description: description.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_line_with_whole_text_bullets() {
        let text = "Jane Roe\nWork Experience\nSoftware Engineer — Acme Corp (Jan 2020 - Mar 2021)\n• Built billing APIs\n• Cut deploy time in half\nEducation";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            ExperienceMatch {
                job_title: "Software Engineer".into(),
                company: "Acme Corp".into(),
                duration: "Jan 2020 - Mar 2021".into(),
                description: vec!["Built billing APIs".into(), "Cut deploy time in half".into()],
            }
        );
    }

    #[test]
    fn test_only_first_entry_kept() {
        let text = "Internship: Intern – Foo Labs (2019)\nExperience: Developer - Bar Inc (2020 - 2022)";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "Intern");
        assert_eq!(entries[0].company, "Foo Labs");
        assert_eq!(entries[0].duration, "2019");
    }

    #[test]
    fn test_project_template_fallback() {
        let text = "Project : Inventory Tracker\nEnvironment : C#, SQL Server\nProject Description : Tracks stock\nacross two warehouses.\nRoles: Developer";
        let entries = extract_experience(text);
        assert_eq!(
            entries,
            vec![ExperienceMatch {
                job_title: "Project: Inventory Tracker".into(),
                company: "Personal Project".into(),
                duration: "Not Specified".into(),
                description: vec!["Tracks stock".into()],
            }]
        );
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        assert_eq!(extract_experience("Jane Roe\nFresher"), vec![ExperienceMatch::missing()]);
    }
}
