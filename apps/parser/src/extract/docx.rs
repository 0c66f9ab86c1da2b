use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;
use zip::ZipArchive;

use super::join_lines;
use crate::errors::ExtractError;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the text of every body paragraph of a `.docx`, one paragraph per line.
///
/// Only direct `w:p` children of `w:body` count, so table cells and text boxes
/// are skipped. Empty paragraphs still contribute their newline.
pub fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)
        .map_err(|e| ExtractError::document_parse(path, format!("cannot open file: {e}")))?;
    let xml = read_document_part(file).map_err(|reason| ExtractError::document_parse(path, reason))?;
    let paragraphs =
        body_paragraphs(&xml).map_err(|reason| ExtractError::document_parse(path, reason))?;

    debug!(paragraphs = paragraphs.len(), path = %path.display(), "Extracted DOCX paragraphs");
    Ok(join_lines(paragraphs))
}

fn read_document_part<R: Read + Seek>(reader: R) -> Result<String, String> {
    let mut archive = ZipArchive::new(reader).map_err(|e| format!("not a DOCX archive: {e}"))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("missing {DOCUMENT_PART}: {e}"))?;

    let mut bytes = Vec::new();
    part.read_to_end(&mut bytes)
        .map_err(|e| format!("cannot read {DOCUMENT_PART}: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("{DOCUMENT_PART} is not UTF-8: {e}"))
}

fn body_paragraphs(xml: &str) -> Result<Vec<String>, String> {
    let doc = Document::parse(xml).map_err(|e| format!("malformed {DOCUMENT_PART}: {e}"))?;
    let body = doc
        .root_element()
        .children()
        .find(|n| is_w(n, "body"))
        .ok_or_else(|| format!("{DOCUMENT_PART} has no w:body"))?;

    Ok(body
        .children()
        .filter(|n| is_w(n, "p"))
        .map(paragraph_text)
        .collect())
}

/// Concatenates run text the way Word renders it: tabs and line breaks become
/// whitespace. Page and column breaks add nothing, and text-box content
/// anchored inside the paragraph is skipped.
fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    collect_run_text(paragraph, &mut text);
    text
}

fn collect_run_text(node: Node, text: &mut String) {
    for child in node.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NS) {
            collect_run_text(child, text);
            continue;
        }
        match child.tag_name().name() {
            "txbxContent" => {}
            "t" => text.push_str(child.text().unwrap_or_default()),
            "tab" if is_run_child(&child) => text.push('\t'),
            "br" if is_line_break(&child) => text.push('\n'),
            "cr" => text.push('\n'),
            _ => collect_run_text(child, text),
        }
    }
}

/// `w:br` without a type, or typed `textWrapping`, is a line break.
fn is_line_break(node: &Node) -> bool {
    matches!(node.attribute((W_NS, "type")), None | Some("textWrapping"))
}

fn is_w(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(W_NS)
}

/// `w:tab` also appears inside `w:tabs` paragraph properties, which are not text.
fn is_run_child(node: &Node) -> bool {
    node.parent().map(|p| is_w(&p, "r")).unwrap_or(false)
}
