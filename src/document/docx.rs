// src/document/docx.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;
use roxmltree::{Document, Node};
use zip::ZipArchive;
use crate::utils::error::ExtractError;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts every non-empty body paragraph, then every non-empty table cell
/// (tables in document order, rows top-to-bottom, cells left-to-right), one per line.
///
/// Table content always follows the paragraphs; positions are not interleaved.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ExtractError::malformed(path, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::malformed(path, format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)?;

    text_from_document_xml(&xml).map_err(|e| ExtractError::malformed(path, e))
}

/// Flattens a `word/document.xml` part into lines.
pub fn text_from_document_xml(xml: &str) -> Result<String, roxmltree::Error> {
    let doc = Document::parse(xml)?;

    let Some(body) = doc.descendants().find(|n| n.has_tag_name((WORD_NS, "body"))) else {
        return Ok(String::new());
    };

    let mut lines: Vec<String> = Vec::new();

    // Paragraphs directly under the body; table paragraphs come later
    for paragraph in body.children().filter(|n| n.has_tag_name((WORD_NS, "p"))) {
        let text = paragraph_text(paragraph);
        let text = text.trim();
        if !text.is_empty() {
            lines.push(text.to_string());
        }
    }

    for table in body.children().filter(|n| n.has_tag_name((WORD_NS, "tbl"))) {
        for row in table.children().filter(|n| n.has_tag_name((WORD_NS, "tr"))) {
            for cell in row.children().filter(|n| n.has_tag_name((WORD_NS, "tc"))) {
                let text = cell_text(cell);
                let text = text.trim();
                if !text.is_empty() {
                    lines.push(text.to_string());
                }
            }
        }
    }

    Ok(lines.join("\n"))
}

/// Cell text is its paragraphs joined with newlines.
fn cell_text(cell: Node) -> String {
    cell.children()
        .filter(|n| n.has_tag_name((WORD_NS, "p")))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of the paragraph's own runs, hyperlink runs included.
/// Drawings and text boxes nested inside a run are not part of the paragraph.
fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    for child in paragraph.children().filter(|n| n.is_element()) {
        if child.has_tag_name((WORD_NS, "r")) {
            push_run_text(child, &mut text);
        } else if child.has_tag_name((WORD_NS, "hyperlink")) {
            for run in child.children().filter(|n| n.has_tag_name((WORD_NS, "r"))) {
                push_run_text(run, &mut text);
            }
        }
    }
    text
}

fn push_run_text(run: Node, text: &mut String) {
    for node in run.children() {
        if !node.is_element() || node.tag_name().namespace() != Some(WORD_NS) {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            WORD_NS, body
        )
    }

    fn para(text: &str) -> String {
        format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", text)
    }

    fn cell(text: &str) -> String {
        format!("<w:tc>{}</w:tc>", para(text))
    }

    #[test]
    fn test_paragraphs_then_tables() {
        let body = format!(
            "{}<w:tbl><w:tr>{}{}</w:tr><w:tr>{}{}</w:tr></w:tbl>{}{}",
            para("Jane Roe"),
            cell("DOB"),
            cell("05-06-1998"),
            cell(""),
            cell("Gender: Female"),
            para("  "),
            para("Email: jane@example.com"),
        );
        let text = text_from_document_xml(&wrap_body(&body)).unwrap();
        assert_eq!(
            text,
            "Jane Roe\nEmail: jane@example.com\nDOB\n05-06-1998\nGender: Female"
        );
    }

    #[test]
    fn test_runs_are_concatenated_and_trimmed() {
        let body = "<w:p><w:r><w:t>  **Jane</w:t></w:r><w:r><w:t xml:space=\"preserve\"> Roe**</w:t></w:r><w:r><w:tab/><w:t>CV</w:t></w:r></w:p>";
        let text = text_from_document_xml(&wrap_body(body)).unwrap();
        assert_eq!(text, "**Jane Roe**\tCV");
    }

    #[test]
    fn test_text_boxes_are_not_paragraph_text() {
        let text_box = format!("<w:txbxContent>{}</w:txbxContent>", para("DOB: 05-06-1998"));
        let body = format!(
            "<w:p><w:r><w:t>Jane Roe</w:t></w:r><w:r>\
             <mc:AlternateContent xmlns:mc=\"http://schemas.openxmlformats.org/markup-compatibility/2006\">\
             <mc:Choice Requires=\"wps\"><w:drawing>{tb}</w:drawing></mc:Choice>\
             <mc:Fallback><w:pict>{tb}</w:pict></mc:Fallback>\
             </mc:AlternateContent></w:r></w:p>",
            tb = text_box
        );
        let text = text_from_document_xml(&wrap_body(&body)).unwrap();
        assert_eq!(text, "Jane Roe");
    }

    #[test]
    fn test_hyperlink_runs_are_kept() {
        let body = "<w:p><w:r><w:t xml:space=\"preserve\">Portfolio: </w:t></w:r>\
                    <w:hyperlink><w:r><w:t>https://github.com/janeroe</w:t></w:r></w:hyperlink></w:p>";
        let text = text_from_document_xml(&wrap_body(body)).unwrap();
        assert_eq!(text, "Portfolio: https://github.com/janeroe");
    }

    #[test]
    fn test_multi_paragraph_cell() {
        let body = format!("<w:tbl><w:tr><w:tc>{}{}</w:tc></w:tr></w:tbl>", para("Address:"), para("12 Main Road 560001"));
        let text = text_from_document_xml(&wrap_body(&body)).unwrap();
        assert_eq!(text, "Address:\n12 Main Road 560001");
    }

    #[test]
    fn test_reads_docx_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        {
            let file = File::create(&path).unwrap();
            let mut zip = zip::ZipWriter::new(file);
            zip.start_file(DOCUMENT_PART, SimpleFileOptions::default()).unwrap();
            zip.write_all(wrap_body(&para("Jane Roe")).as_bytes()).unwrap();
            zip.finish().unwrap();
        }

        assert_eq!(extract_text(&path).unwrap(), "Jane Roe");
    }

    #[test]
    fn test_not_a_zip_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        std::fs::write(&path, "plain text pretending to be docx").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDocument { .. }), "got {:?}", err);
    }

    #[test]
    fn test_missing_document_part_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        {
            let file = File::create(&path).unwrap();
            let mut zip = zip::ZipWriter::new(file);
            zip.start_file("word/styles.xml", SimpleFileOptions::default()).unwrap();
            zip.write_all(b"<styles/>").unwrap();
            zip.finish().unwrap();
        }

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDocument { .. }), "got {:?}", err);
    }
}
