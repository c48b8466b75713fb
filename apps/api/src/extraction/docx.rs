use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

static PARAGRAPH_PROPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:pPr>.*?</w:pPr>").expect("valid regex"));

static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<w:p\b[^>]*?(?:/>|>(.*?)</w:p>)").expect("valid regex"));

static RUN_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:(tab|br|cr)\b[^>]*/>").expect("valid regex")
});

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|[a-z]+);").expect("valid regex"));

/// Reads the main document part of a DOCX archive and returns its paragraphs joined
/// by newlines.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    Ok(document_xml_to_text(&xml))
}

fn document_xml_to_text(xml: &str) -> String {
    let body = PARAGRAPH_PROPS.replace_all(xml, "");
    let paragraphs: Vec<String> = PARAGRAPH
        .captures_iter(&body)
        .map(|cap| cap.get(1).map(|m| paragraph_text(m.as_str())).unwrap_or_default())
        .collect();
    paragraphs.join("\n").trim().to_string()
}

fn paragraph_text(inner: &str) -> String {
    let mut text = String::new();
    for cap in RUN_CONTENT.captures_iter(inner) {
        if let Some(run) = cap.get(1) {
            text.push_str(&decode_entities(run.as_str()));
        } else if let Some(tag) = cap.get(2) {
            text.push(if tag.as_str() == "tab" { '\t' } else { '\n' });
        }
    }
    text
}

fn decode_entities(raw: &str) -> String {
    ENTITY
        .replace_all(raw, |cap: &Captures| {
            let name = &cap[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if name.starts_with("#x") => u32::from_str_radix(&name[2..], 16)
                    .ok()
                    .and_then(char::from_u32),
                _ if name.starts_with('#') => name[1..].parse().ok().and_then(char::from_u32),
                _ => None,
            };
            decoded.map(String::from).unwrap_or_else(|| cap[0].to_string())
        })
        .into_owned()
}
