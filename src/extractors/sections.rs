// src/extractors/sections.rs
//! Section segmentation and bullet-point splitting shared by several field extractors.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Section Headers (Lazy Static) ---
pub static SKILLS_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Technical Skills|Skills? & Abilities|Skill Set)")
        .expect("Failed to compile SKILLS_HEADER_RE")
});

pub static CERTIFICATIONS_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Certifications?|Certificates?)")
        .expect("Failed to compile CERTIFICATIONS_HEADER_RE")
});

// --- Section End Markers ---
// A newline, optional whitespace, then the next known header (prefix match).
static SKILLS_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*(?:Experience|Education|Projects)")
        .expect("Failed to compile SKILLS_END_RE")
});

static CERTIFICATIONS_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*(?:Experience|Education)").expect("Failed to compile CERTIFICATIONS_END_RE")
});

// --- Bullets ---
static BULLET_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:•|-|\x{F0A7})[ \t]*").expect("Failed to compile BULLET_START_RE")
});

static BULLET_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*(?:•|-|\x{F0A7}|\w)").expect("Failed to compile BULLET_END_RE")
});

/// Which section of a résumé to carve out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Certifications,
}

impl Section {
    fn header(&self) -> &'static Regex {
        match self {
            Section::Skills => &*SKILLS_HEADER_RE,
            Section::Certifications => &*CERTIFICATIONS_HEADER_RE,
        }
    }

    fn end(&self) -> &'static Regex {
        match self {
            Section::Skills => &*SKILLS_END_RE,
            Section::Certifications => &*CERTIFICATIONS_END_RE,
        }
    }
}

/// Returns the body of the first occurrence of `section`: everything after its header
/// (separators included) up to the next known section header, or the end of the text.
pub fn section_body(text: &str, section: Section) -> Option<&str> {
    let header = section.header().find(text)?;
    let start = header.end();
    let end = section
        .end()
        .find_at(text, start)
        .map(|m| m.start())
        .unwrap_or(text.len());

    tracing::trace!("{:?} section spans bytes {}..{}", section, start, end);
    Some(&text[start..end])
}

/// Splits out every bullet-led fragment in the text.
///
/// A fragment starts after a line-leading `•`, `-` or `` marker and runs until the
/// next line that begins with a bullet or a word character. Approximate by nature:
/// multi-paragraph bullets get cut at the first paragraph break.
pub fn bullet_points(text: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut cursor = 0;

    while let Some(start) = BULLET_START_RE.find_at(text, cursor) {
        let body_start = start.end();
        if body_start >= text.len() {
            break;
        }
        // A marker with nothing after it on its line ends right away
        let body_end = BULLET_END_RE
            .find_at(text, body_start)
            .map(|m| m.start())
            .unwrap_or(text.len());

        let fragment = text[body_start..body_end].trim();
        if !fragment.is_empty() {
            bullets.push(fragment.to_string());
        }
        cursor = body_end.max(next_char_boundary(text, start.start()));
    }

    bullets
}

fn next_char_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len())
}
