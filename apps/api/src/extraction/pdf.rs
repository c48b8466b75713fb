use super::ExtractionError;

/// Extracts the text layer of every page. Scanned PDFs without a text layer yield `""`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(normalize_pages(&text))
}

/// pdf-extract separates pages with form feeds and pads lines with trailing spaces.
fn normalize_pages(raw: &str) -> String {
    raw.split('\u{c}')
        .map(|page| {
            page.lines()
                .map(str::trim_end)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
