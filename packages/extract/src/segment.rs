//! Per-student record segmentation.
//!
//! Scans the full concatenated document text for student header blocks
//! and carves out a contiguous span of text for each student, running up
//! to the next header or the end of the document.
//!
//! A header is recognized by a single regex window containing the
//! student id, name, exam, semester, and 4-digit year in order. This is
//! a known fragility: a header with reordered or missing fields will not
//! match and that student is silently dropped (the span count is logged
//! at debug level so mismatches are observable).

use regex::Regex;

/// Anchor that delimits consecutive student spans.
const HEADER_ANCHOR: &str = "Student ID:";

/// A contiguous slice of document text attributed to one student,
/// together with the identity fields captured from its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSpan {
    /// Student identifier token (e.g., "CS010").
    pub student_id: String,
    /// Student name, trimmed.
    pub student_name: String,
    /// Exam name, trimmed.
    pub exam_name: String,
    /// Semester, trimmed.
    pub semester: String,
    /// 4-digit year string.
    pub year: String,
    /// Text following the header match, up to (but not including) the
    /// next header anchor or end of document. Subject rows and the
    /// explicit total line live here.
    pub body: String,
}

/// Regex recognizing a complete student header in one contiguous window.
fn header_regex() -> Regex {
    Regex::new(
        r"(?i)Student ID:\s*(\w+)\s*Name:\s*([^,]+),?\s*Exam:\s*([^,]+),?\s*Semester:\s*([^,]+),?\s*Year:\s*(\d{4})",
    )
    .unwrap_or_else(|_| unreachable!())
}

/// Segments the full document text into per-student spans.
///
/// Single pass, left to right, non-overlapping. Zero matching headers is
/// a legitimate outcome (malformed document) and yields an empty vector,
/// not an error.
#[must_use]
pub fn student_spans(full_text: &str) -> Vec<StudentSpan> {
    let header_re = header_regex();
    let mut spans = Vec::new();

    for caps in header_re.captures_iter(full_text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        // The span body runs from the end of this header to the next
        // header anchor or end of text.
        let rest = &full_text[whole.end()..];
        let body_end = rest.find(HEADER_ANCHOR).unwrap_or(rest.len());

        spans.push(StudentSpan {
            student_id: caps[1].to_string(),
            student_name: caps[2].trim().to_string(),
            exam_name: caps[3].trim().to_string(),
            semester: caps[4].trim().to_string(),
            year: caps[5].to_string(),
            body: rest[..body_end].to_string(),
        });
    }

    log::debug!("Segmented {} student span(s)", spans.len());

    spans
}
