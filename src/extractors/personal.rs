// src/extractors/personal.rs
//! Personal detail extractors: name, email, phone, address, date of birth,
//! father's name, gender and languages.

use once_cell::sync::Lazy;
use regex::Regex;
use crate::extractors::rules::{group, FnRule, PatternRule, RuleChain};
use crate::resume::models::NOT_PROVIDED;

/// First name and the remaining name tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    fn from_full(full: &str) -> Self {
        let mut parts = full.split_whitespace();
        let first = parts.next().unwrap_or(NOT_PROVIDED).to_string();
        let rest = parts.collect::<Vec<_>>().join(" ");
        let last = if rest.is_empty() { NOT_PROVIDED.to_string() } else { rest };
        Self { first, last }
    }

    fn missing() -> Self {
        Self {
            first: NOT_PROVIDED.to_string(),
            last: NOT_PROVIDED.to_string(),
        }
    }
}

// --- Rule Chains (Lazy Static) ---
static NAME_RULES: Lazy<RuleChain<String>> = Lazy::new(|| {
    RuleChain::new("name")
        // "Name: Jane Roe" or "Full Name: Jane Roe" at the start of a line.
        // Only candidate qualifiers; "Father's Name" or "Company Name" never match.
        .rule(PatternRule::new(
            "name label",
            r"(?m)^[ \t]*(?i:(?:full|candidate|applicant|employee|student|legal)[ \t]+)?(?i:name)\b[ \t]*:*[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})\b",
            |c| group(c, 1),
        ))
        // Document opens with a capitalised two or three word run
        .rule(PatternRule::new(
            "leading capitalised words",
            r"\A\s*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})\b",
            |c| group(c, 1),
        ))
        // Bold header from DOCX, e.g. "**Jane Roe**"
        .rule(FnRule::new("first line without bold markers", first_line_name))
});

static ADDRESS_RULES: Lazy<RuleChain<String>> = Lazy::new(|| {
    RuleChain::new("address")
        .rule(PatternRule::new(
            "address label",
            r"(?i)(?:Address|Correspondence Address)[:\s-]*([^\n]+)(?:\n\s*([^\n]+))?",
            |c| {
                let parts: Vec<String> = [group(c, 1), group(c, 2)].into_iter().flatten().collect();
                if parts.is_empty() { None } else { Some(parts.join(" ")) }
            },
        ))
        .rule(FnRule::new("line with postal code", postal_code_line))
});

static DOB_RULES: Lazy<RuleChain<String>> = Lazy::new(|| {
    RuleChain::new("date of birth")
        .rule(PatternRule::new(
            "dob label",
            r"(?i)\b(?:dob|date\s*of\s*birth|birth\s*date|d\.o\.b\.?)\s*[:\-\s]*\s*(\d{1,2}[-/\s.]+\d{1,2}[-/\s.]+\d{4})\b",
            |c| group(c, 1),
        ))
        .rule(PatternRule::new(
            "day-month-year",
            r"(?i)\b(\d{1,2}[-/\s.]\d{1,2}[-/\s.]\d{4})\b",
            |c| group(c, 1),
        ))
        .rule(PatternRule::new(
            "year-month-day",
            r"(?i)\b(\d{4}[-/\s.]\d{1,2}[-/\s.]\d{1,2})\b",
            |c| group(c, 1),
        ))
});

static FATHER_NAME_RULES: Lazy<RuleChain<String>> = Lazy::new(|| {
    RuleChain::new("father's name").rule(PatternRule::new(
        "father's name label",
        r"(?i)father['’s]*\s*name[:\s-]+([^\n]+)",
        |c| group(c, 1),
    ))
});

static GENDER_RULES: Lazy<RuleChain<String>> = Lazy::new(|| {
    RuleChain::new("gender").rule(PatternRule::new(
        "gender label",
        r"(?i)gender[:\s-]+([A-Za-z]+)",
        |c| group(c, 1),
    ))
});

static LANGUAGE_RULES: Lazy<RuleChain<Vec<String>>> = Lazy::new(|| {
    RuleChain::new("languages").rule(PatternRule::new(
        "languages label",
        r"(?i)languages?\s*(?:known|proficiency)[:\s-]+([A-Za-z,/\s]+?)(?:\n|$)",
        |c| {
            let languages: Vec<String> = c
                .get(1)?
                .as_str()
                .split([',', '/'])
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            if languages.is_empty() { None } else { Some(languages) }
        },
    ))
});

// --- Multi-match Patterns ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Failed to compile EMAIL_RE")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(?:Contact(?:\s*Info)?|Phone|Mobile|Tel|Cell)[\s:.-]*)?(\+?\d{1,3}[-.\s]?\(?\d{2,4}\)?[-.\s]?\d{3,4}[-.\s]?\d{4})")
        .expect("Failed to compile PHONE_RE")
});

static FIRST_LINE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]+\s+[A-Z][a-z]+)").expect("Failed to compile FIRST_LINE_NAME_RE")
});

static POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{6}").expect("Failed to compile POSTAL_CODE_RE"));

static CONTACT_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"name|email|phone").expect("Failed to compile CONTACT_WORD_RE"));

/// Label and header patterns used by the debug annotator.
pub fn debug_patterns() -> Vec<(&'static Regex, &'static str)> {
    static LABELS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
        [
            (r"(?im)^[ \t]*(?:(?:full|candidate|applicant|employee|student|legal)[ \t]+)?name\b[ \t]*:*", "name"),
            (r"(?i)(?:Correspondence )?Address", "address"),
            (r"(?i)\b(?:dob|date\s*of\s*birth|birth\s*date|d\.o\.b\.?)", "dob"),
            (r"(?i)father['’s]*\s*name", "father"),
            (r"(?i)gender", "gender"),
            (r"(?i)languages?\s*(?:known|proficiency)", "languages"),
        ]
        .iter()
        .filter_map(|(pat, kind)| Regex::new(pat).ok().map(|re| (re, *kind)))
        .collect()
    });
    LABELS.iter().map(|(re, kind)| (re, *kind)).collect()
}

pub fn extract_name(text: &str) -> PersonName {
    NAME_RULES
        .first_match(text)
        .map(|full| PersonName::from_full(&full))
        .unwrap_or_else(PersonName::missing)
}

/// Every email address in the text, in order of appearance.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Every phone-like digit group, or the sentinel singleton when there is none.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    let numbers: Vec<String> = PHONE_RE
        .captures_iter(text)
        .filter_map(|c| group(&c, 1))
        .collect();

    if numbers.is_empty() {
        vec![NOT_PROVIDED.to_string()]
    } else {
        numbers
    }
}

pub fn extract_address(text: &str) -> String {
    ADDRESS_RULES.first_match(text).unwrap_or_else(|| NOT_PROVIDED.to_string())
}

pub fn extract_date_of_birth(text: &str) -> String {
    DOB_RULES.first_match(text).unwrap_or_else(|| NOT_PROVIDED.to_string())
}

pub fn extract_father_name(text: &str) -> String {
    FATHER_NAME_RULES.first_match(text).unwrap_or_else(|| NOT_PROVIDED.to_string())
}

pub fn extract_gender(text: &str) -> String {
    GENDER_RULES.first_match(text).unwrap_or_else(|| NOT_PROVIDED.to_string())
}

pub fn extract_languages(text: &str) -> Vec<String> {
    LANGUAGE_RULES
        .first_match(text)
        .unwrap_or_else(|| vec![NOT_PROVIDED.to_string()])
}

fn first_line_name(text: &str) -> Option<String> {
    let first_line = text.split('\n').next()?.replace("**", "");
    let caps = FIRST_LINE_NAME_RE.captures(first_line.trim())?;
    group(&caps, 1)
}

fn postal_code_line(text: &str) -> Option<String> {
    text.split('\n')
        .find(|line| POSTAL_CODE_RE.is_match(line) && !CONTACT_WORD_RE.is_match(&line.to_lowercase()))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}
