// src/extractors/certifications.rs
use once_cell::sync::Lazy;
use regex::Regex;
use crate::extractors::rules::group;
use crate::extractors::sections::{section_body, Section};

static CERT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:-|•|\x{F0A7})[ \t]+([^\n]+)").expect("Failed to compile CERT_LINE_RE")
});

/// Bullet-led lines inside the certifications section.
pub fn extract_certifications(text: &str) -> Vec<String> {
    let Some(body) = section_body(text, Section::Certifications) else {
        return Vec::new();
    };

    CERT_LINE_RE
        .captures_iter(body)
        .filter_map(|c| group(&c, 1))
        .collect()
}
