// src/utils/text_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use regex::Regex;
use crate::utils::error::StorageError;

/// Saves a text blob to a file with every highlight wrapped in `[[kind>` ... `<kind]]` markers.
/// Highlights overlapping an earlier one are dropped.
pub fn save_debug_text(text: &str, path: &Path, highlights: &[(usize, usize, &str)]) -> Result<(), StorageError> {
    let mut file = File::create(path)?;
    let annotated = annotate(text, highlights);
    file.write_all(annotated.as_bytes())?;

    tracing::info!("Saved annotated debug text to {}", path.display());
    Ok(())
}

/// Creates an annotated copy of the text with every match of the given patterns highlighted
pub fn create_debug_text(text: &str, path: &Path, patterns: &[(&Regex, &str)]) -> Result<(), StorageError> {
    let mut highlights = Vec::new();

    // Find all matches for each pattern and add them to highlights
    for (re, kind) in patterns {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *kind));
        }
    }

    save_debug_text(text, path, &highlights)
}

fn annotate(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut out = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0); // Sort by position

    for (start, end, kind) in sorted_highlights {
        if start < last_pos || end > text.len() {
            continue;
        }
        out.push_str(&text[last_pos..start]);
        out.push_str(&format!("[[{}>", kind));
        out.push_str(&text[start..end]);
        out.push_str(&format!("<{}]]", kind));
        last_pos = end;
    }

    out.push_str(&text[last_pos..]);
    out
}
