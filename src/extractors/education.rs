// src/extractors/education.rs
use once_cell::sync::Lazy;
use regex::Regex;
use crate::extractors::rules::{group, FnRule, PatternRule, RuleChain};
use crate::resume::models::NOT_PROVIDED;

/// One education entry as found in the text, before year splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationMatch {
    pub degree: String,
    pub institution: String,
    /// A single year or a `YYYY-YYYY` range.
    pub year: String,
}

impl EducationMatch {
    fn missing() -> Self {
        Self {
            degree: NOT_PROVIDED.to_string(),
            institution: NOT_PROVIDED.to_string(),
            year: NOT_PROVIDED.to_string(),
        }
    }
}

// Pipe-delimited table row: degree | percentage | ... year | institution, followed by
// a line opening with `|` or `+` (the next row or the table border).
pub static TABLE_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Pursuing BCA|10\+2|High School)\b\s*\|\s*(\d+%)\s*\|\s*.*?(\d{4})\s*\|\s*([^\n]*)\n[|+]")
        .expect("Failed to compile TABLE_ROW_RE")
});

// Layouts are mutually exclusive: the first that yields anything is used.
static EDUCATION_LAYOUTS: Lazy<RuleChain<Vec<EducationMatch>>> = Lazy::new(|| {
    RuleChain::new("education")
        .rule(FnRule::new("pipe table rows", table_rows))
        .rule(PatternRule::new(
            "educational qualifications sentence",
            r"Educational Qualifications\s*:\s*(.*?)\s*,\s*(.*?)\s*[–-]\s*(\d{4}\s*[–-]\s*\d{4})",
            |c| {
                Some(vec![EducationMatch {
                    degree: group(c, 1)?,
                    institution: group(c, 2)?,
                    year: group(c, 3)?.replace('–', "-"),
                }])
            },
        ))
});

/// Education entries from the first layout that matches; one sentinel entry otherwise.
pub fn extract_education(text: &str) -> Vec<EducationMatch> {
    EDUCATION_LAYOUTS
        .first_match(text)
        .unwrap_or_else(|| vec![EducationMatch::missing()])
}

fn table_rows(text: &str) -> Option<Vec<EducationMatch>> {
    let rows: Vec<EducationMatch> = TABLE_ROW_RE
        .captures_iter(text)
        .map(|c| EducationMatch {
            degree: group(&c, 1).unwrap_or_default(),
            institution: c
                .get(4)
                .map(|m| m.as_str().trim().trim_end_matches('|').trim().to_string())
                .unwrap_or_default(),
            year: group(&c, 3).unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() { None } else { Some(rows) }
}
