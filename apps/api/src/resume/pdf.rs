//! Résumé text extraction from uploaded PDFs.

use tracing::{debug, warn};

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const EXTRACTION_FAILED: &str = "Failed to extract text from PDF";

/// pdf-extract separates pages with form feeds.
const PAGE_BREAK: char = '\x0C';

/// True for an `application/pdf` upload or any file named `*.pdf`.
pub fn is_pdf_file(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_type = content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);
    let by_name = file_name
        .map(|name| name.trim().to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    by_type || by_name
}

/// Extracted résumé text plus the page count pdf-extract reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<ExtractedText, AppError> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!("PDF extraction failed: {}", e);
        AppError::Validation(EXTRACTION_FAILED.to_string())
    })?;

    let extracted = tidy_pages(&raw);
    debug!(
        "Extracted {} chars from {} PDF page(s)",
        extracted.text.len(),
        extracted.page_count
    );
    Ok(extracted)
}

/// Collapses whitespace inside each line and joins non-blank pages with a blank line.
fn tidy_pages(raw: &str) -> ExtractedText {
    let pages: Vec<String> = raw
        .split(PAGE_BREAK)
        .map(|page| {
            page.lines()
                .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|page| !page.is_empty())
        .collect();

    ExtractedText {
        page_count: pages.len(),
        text: pages.join("\n\n"),
    }
}
