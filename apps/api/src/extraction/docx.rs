//! DOCX text extraction: reads `word/document.xml` out of the zip container and
//! concatenates the text runs of each paragraph.

use std::io::{Cursor, Read};

use roxmltree::Node;
use zip::ZipArchive;

use super::push_block;

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Extracts paragraph text, one newline after each paragraph that has text.
pub fn extract_text(bytes: &[u8]) -> Result<String, String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| format!("not a zip container: {e}"))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| format!("missing word/document.xml: {e}"))?
        .read_to_string(&mut xml)
        .map_err(|e| format!("failed to read word/document.xml: {e}"))?;

    paragraphs_to_text(&xml)
}

/// Only paragraphs directly under `<w:body>` count, the same set Word's object model
/// exposes as the document's paragraphs. Table cells are not visited.
fn paragraphs_to_text(xml: &str) -> Result<String, String> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| format!("malformed document.xml: {e}"))?;

    let Some(body) = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name((WORDPROCESSING_NS, "body")))
    else {
        return Ok(String::new());
    };

    let mut text = String::new();
    for paragraph in body
        .children()
        .filter(|n| n.has_tag_name((WORDPROCESSING_NS, "p")))
    {
        push_block(&mut text, &paragraph_text(paragraph));
    }
    Ok(text)
}

/// Text runs of one paragraph. Soft line breaks become newlines so the words on either
/// side stay separate.
fn paragraph_text(paragraph: Node) -> String {
    let mut line = String::new();
    for node in paragraph.descendants().filter(|n| n.is_element()) {
        if node.tag_name().namespace() != Some(WORDPROCESSING_NS) || !owned_by(node, paragraph) {
            continue;
        }
        match node.tag_name().name() {
            "t" => line.push_str(node.text().unwrap_or_default()),
            "tab" => line.push('\t'),
            "br" | "cr" => line.push('\n'),
            _ => {}
        }
    }
    line
}

/// Text boxes carry paragraphs of their own inside a run; those belong to the inner
/// paragraph, not the one being read.
fn owned_by<'a, 'input>(node: Node<'a, 'input>, paragraph: Node<'a, 'input>) -> bool {
    node.ancestors()
        .skip(1)
        .find(|a| a.has_tag_name((WORDPROCESSING_NS, "p")))
        == Some(paragraph)
}
