//! Subject-row parsing within a student span.
//!
//! A subject row has the shape `<name>: <marks> / <total> (<grade>)`,
//! e.g. `Mathematics: 40/50 (B)`. The grade capture is kept opaque:
//! documents occasionally print grades outside the standard vocabulary,
//! so anything letter-shaped in that position is accepted as-is.

use regex::Regex;
use result_portal_result_models::SubjectScore;

/// Regex recognizing one subject row. The parenthesized grade is a
/// single letter with an optional `+`/`-` modifier, which keeps the
/// explicit `Total: … (93.3%)` line from matching as a subject.
fn row_regex() -> Regex {
    Regex::new(r"(?i)(\w[\w\s]+):\s*(\d+)\s*/\s*(\d+)\s*\(([A-Za-z][+-]?)\)")
        .unwrap_or_else(|_| unreachable!())
}

/// Parses zero or more subject rows from a span body, in document order.
///
/// Duplicate subject names are retained; the aggregator sums across
/// whatever rows exist. No matching rows yields an empty list, never an
/// error.
#[must_use]
pub fn subject_rows(body: &str) -> Vec<SubjectScore> {
    let rows: Vec<SubjectScore> = row_regex()
        .captures_iter(body)
        .filter_map(|caps| {
            Some(SubjectScore {
                name: caps[1].trim().to_string(),
                marks: caps[2].parse().ok()?,
                total_marks: caps[3].parse().ok()?,
                grade: caps[4].to_string(),
            })
        })
        .collect();

    log::debug!("Parsed {} subject row(s)", rows.len());

    rows
}
