#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical student result record types.
//!
//! Every result sheet, whatever its layout quirks, is extracted into
//! [`ResultRecord`]: one record per student, with its subject rows in
//! document order. These are the types the extraction pipeline emits and
//! the persistence layer stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The standard letter-grade vocabulary, best to worst.
///
/// Advisory only: result sheets occasionally embed grades outside this
/// table, so [`SubjectScore::grade`] and [`ResultRecord::grade`] are kept
/// as opaque strings rather than an enum.
pub const LETTER_GRADES: &[&str] = &[
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D", "F",
];

/// Placeholder grade for records where no grade could be determined.
pub const GRADE_NOT_AVAILABLE: &str = "N/A";

/// Returns `true` if `grade` is in the standard vocabulary (or `"N/A"`).
#[must_use]
pub fn is_standard_grade(grade: &str) -> bool {
    grade == GRADE_NOT_AVAILABLE || LETTER_GRADES.contains(&grade)
}

/// A single subject row parsed from a result sheet.
///
/// Immutable once parsed; corrections happen by re-extracting the
/// document, never by editing rows in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    /// Subject name as printed (trimmed, non-empty).
    pub name: String,
    /// Marks the student obtained.
    pub marks: u32,
    /// Maximum marks for the subject.
    pub total_marks: u32,
    /// Letter grade as printed. Opaque string, see [`LETTER_GRADES`].
    pub grade: String,
}

/// One student's assembled result record.
///
/// `id` is provisional (`tmp-<uuid>`) when the record comes out of the
/// extraction pipeline; the persistence layer replaces it with a durable
/// id on insert. Records are never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Opaque unique identifier (provisional until persisted).
    pub id: String,
    /// Student identifier token from the sheet (e.g., "CS010").
    pub student_id: String,
    /// Student name (trimmed, non-empty).
    pub student_name: String,
    /// Exam name (e.g., "Midterm").
    pub exam_name: String,
    /// Semester (e.g., "Fall 2024").
    pub semester: String,
    /// 4-digit year string.
    pub year: String,
    /// Subject rows in document order. Duplicate subject names are
    /// retained; the aggregator sums whatever rows exist.
    pub subjects: Vec<SubjectScore>,
    /// Total possible marks. Sum of subject totals unless the document
    /// states an explicit total, which wins.
    pub total_marks: u32,
    /// Marks obtained. Same precedence rule as `total_marks`.
    pub obtained_marks: u32,
    /// Percentage in `[0, 100]`. Computed from the sums unless the
    /// document states it directly.
    pub percentage: f64,
    /// Overall letter grade. Opaque string, see [`LETTER_GRADES`].
    pub grade: String,
    /// Wall-clock time of extraction.
    pub upload_date: DateTime<Utc>,
    /// Optional reference to the source artifact (e.g., the PDF URL).
    pub pdf_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grades_are_recognized() {
        for grade in LETTER_GRADES {
            assert!(is_standard_grade(grade));
        }
        assert!(is_standard_grade("N/A"));
    }

    #[test]
    fn nonstandard_grades_are_rejected() {
        assert!(!is_standard_grade("E"));
        assert!(!is_standard_grade("A++"));
        assert!(!is_standard_grade(""));
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = ResultRecord {
            id: "tmp-1".to_string(),
            student_id: "CS010".to_string(),
            student_name: "A B".to_string(),
            exam_name: "Mid".to_string(),
            semester: "Fall 2024".to_string(),
            year: "2024".to_string(),
            subjects: vec![SubjectScore {
                name: "Mathematics".to_string(),
                marks: 40,
                total_marks: 50,
                grade: "B".to_string(),
            }],
            total_marks: 50,
            obtained_marks: 40,
            percentage: 80.0,
            grade: "A-".to_string(),
            upload_date: Utc::now(),
            pdf_url: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["studentId"], "CS010");
        assert_eq!(json["totalMarks"], 50);
        assert_eq!(json["subjects"][0]["totalMarks"], 50);
        assert!(json["uploadDate"].is_string());
        assert!(json["pdfUrl"].is_null());
    }
}
