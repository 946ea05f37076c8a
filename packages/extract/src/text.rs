//! Page-level text extraction from paginated documents.
//!
//! [`PageTextSource`] is the capability boundary for the rest of the
//! pipeline: anything that can turn document bytes into an ordered
//! sequence of page text strings satisfies it. The reference
//! implementation is [`PdfTextSource`], backed by pure-Rust
//! [`pdf_extract`]. Tests drive the pipeline through a fake source
//! instead of real PDFs.

use crate::ExtractionError;

/// Ordered page-text access for a paginated document.
pub trait PageTextSource {
    /// Returns the text of each page in the document's native reading
    /// order, one string per page with tokens joined by single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] if the bytes are not a parseable
    /// document of the supported format.
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// Extracts page text from PDF bytes using [`pdf_extract`].
#[derive(Debug, Default)]
pub struct PdfTextSource;

impl PageTextSource for PdfTextSource {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
            ExtractionError::Extraction(format!("failed to extract text from PDF: {e}"))
        })?;

        log::debug!("Extracted text layer from {} page(s)", pages.len());

        Ok(pages.iter().map(|page| normalize_page(page)).collect())
    }
}

/// Returns `true` if none of the pages carry any text tokens, which is
/// how an image-only scan presents after extraction.
#[must_use]
pub fn is_image_only(pages: &[String]) -> bool {
    pages.iter().all(|page| page.trim().is_empty())
}

/// Collapses the layout engine's whitespace so each page reads as its
/// tokens joined by single spaces.
fn normalize_page(page: &str) -> String {
    page.split_whitespace().collect::<Vec<_>>().join(" ")
}
