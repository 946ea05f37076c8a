#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result-sheet extraction pipeline.
//!
//! Turns the raw bytes of an uploaded result sheet PDF into validated
//! [`ResultRecord`]s, one per student. The pipeline is a pure function
//! over the input bytes:
//!
//! 1. [`text`]: extract the text layer, one string per page
//! 2. [`segment`]: carve the concatenated text into per-student spans
//! 3. [`fields`]: parse subject rows out of each span
//! 4. [`grading`]: resolve totals, percentage, and letter grade
//! 5. record assembly (this module): provisional id + upload timestamp
//!
//! A malformed document that matches nothing is an ordinary empty result,
//! not an error; only an unreadable document fails. Concurrent uploads
//! run as independent invocations with no shared state.

pub mod download;
pub mod fields;
pub mod grading;
pub mod segment;
pub mod text;

use chrono::Utc;
use result_portal_result_models::ResultRecord;
use uuid::Uuid;

use crate::segment::StudentSpan;
use crate::text::{PageTextSource, PdfTextSource};

/// Errors specific to result-sheet extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// PDF text extraction failed (unreadable or unsupported document).
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// The document parsed but has no extractable text layer. Image-only
    /// scans land here; OCR is out of scope.
    #[error("document has no extractable text layer")]
    NoTextLayer,

    /// An HTTP request to download a result sheet failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts all student result records from the raw bytes of a result
/// sheet PDF.
///
/// Returns an empty list for a well-formed document containing no
/// recognizable student headers, so callers can tell "nothing found"
/// apart from "extraction failed".
///
/// # Errors
///
/// Returns [`ExtractionError`] if the bytes are not a parseable PDF or
/// the document has no text layer.
pub fn extract_results(bytes: &[u8]) -> Result<Vec<ResultRecord>, ExtractionError> {
    extract_results_with(&PdfTextSource, bytes, None)
}

/// Like [`extract_results`], with an injected page-text source and an
/// optional reference back to the source artifact.
///
/// # Errors
///
/// Returns [`ExtractionError`] if the source fails to produce page text
/// or the pages carry no text layer at all.
pub fn extract_results_with(
    source: &dyn PageTextSource,
    bytes: &[u8],
    pdf_url: Option<&str>,
) -> Result<Vec<ResultRecord>, ExtractionError> {
    let pages = source.page_texts(bytes)?;
    if text::is_image_only(&pages) {
        return Err(ExtractionError::NoTextLayer);
    }
    let full_text = pages.join(" ");

    let records: Vec<ResultRecord> = segment::student_spans(&full_text)
        .iter()
        .map(|span| assemble(span, pdf_url))
        .collect();

    log::info!(
        "Extracted {} result record(s) from {} page(s)",
        records.len(),
        pages.len()
    );

    Ok(records)
}

/// Assembles one canonical record from a segmented student span.
fn assemble(span: &StudentSpan, pdf_url: Option<&str>) -> ResultRecord {
    let subjects = fields::subject_rows(&span.body);
    let overall = grading::resolve(&span.body, &subjects);

    ResultRecord {
        id: provisional_id(),
        student_id: span.student_id.clone(),
        student_name: span.student_name.clone(),
        exam_name: span.exam_name.clone(),
        semester: span.semester.clone(),
        year: span.year.clone(),
        subjects,
        total_marks: overall.total_marks,
        obtained_marks: overall.obtained_marks,
        percentage: overall.percentage,
        grade: overall.grade,
        upload_date: Utc::now(),
        pdf_url: pdf_url.map(str::to_owned),
    }
}

/// Provisional record id, unique within one extraction run. The
/// persistence layer replaces it with a durable id on insert.
fn provisional_id() -> String {
    format!("tmp-{}", Uuid::new_v4())
}
