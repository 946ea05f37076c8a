//! Overall score resolution: explicit document totals, computed
//! aggregation, and the percentage-to-grade table.
//!
//! A document-stated `Total:` line is authoritative and skips
//! computation entirely, with no cross-check against the subject rows;
//! document intent outranks the computed sum. Absent that line, totals
//! are summed from the subject rows and the grade is derived from the
//! threshold table.

use regex::Regex;
use result_portal_result_models::SubjectScore;

/// Percentage thresholds in strictly descending order; first match wins.
/// These cutoffs are a behavioral contract; do not reorder or adjust.
const GRADE_THRESHOLDS: &[(f64, &str)] = &[
    (90.0, "A+"),
    (85.0, "A"),
    (80.0, "A-"),
    (75.0, "B+"),
    (70.0, "B"),
    (65.0, "B-"),
    (60.0, "C+"),
    (55.0, "C"),
    (50.0, "C-"),
    (40.0, "D"),
];

/// Resolved overall figures for one student span.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallScore {
    /// Total possible marks.
    pub total_marks: u32,
    /// Marks obtained.
    pub obtained_marks: u32,
    /// Percentage in `[0, 100]`.
    pub percentage: f64,
    /// Overall letter grade.
    pub grade: String,
}

/// Regex recognizing an explicit overall-total line:
/// `Total: <obtained> / <total> (<percentage>%) Grade: <letter>`.
fn overall_regex() -> Regex {
    Regex::new(r"(?i)Total:\s*(\d+)\s*/\s*(\d+)\s*\((\d+\.?\d*)%\)\s*Grade:\s*([A-Za-z][+-]?)")
        .unwrap_or_else(|_| unreachable!())
}

/// Resolves the overall score for a span: the explicit total line when
/// present (taken verbatim), otherwise aggregation over the subject
/// rows.
#[must_use]
pub fn resolve(body: &str, subjects: &[SubjectScore]) -> OverallScore {
    explicit_overall(body).unwrap_or_else(|| aggregate(subjects))
}

/// Parses the document-stated overall total, if any.
#[must_use]
pub fn explicit_overall(body: &str) -> Option<OverallScore> {
    let caps = overall_regex().captures(body)?;
    Some(OverallScore {
        obtained_marks: caps[1].parse().ok()?,
        total_marks: caps[2].parse().ok()?,
        percentage: caps[3].parse().ok()?,
        grade: caps[4].to_string(),
    })
}

/// Computes overall figures by summing the subject rows. A span with no
/// parsed subjects is degenerate but legal: 0/0 marks, 0%, grade "F".
///
/// Rows carry whatever numbers the sheet printed, so the sums are
/// accumulated in `u64` and saturate at `u32::MAX` on conversion; the
/// percentage is computed from the wide sums before saturation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aggregate(subjects: &[SubjectScore]) -> OverallScore {
    let total: u64 = subjects.iter().map(|s| u64::from(s.total_marks)).sum();
    let obtained: u64 = subjects.iter().map(|s| u64::from(s.marks)).sum();

    let percentage = if total > 0 {
        obtained as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    OverallScore {
        total_marks: u32::try_from(total).unwrap_or(u32::MAX),
        obtained_marks: u32::try_from(obtained).unwrap_or(u32::MAX),
        percentage,
        grade: grade_for_percentage(percentage).to_string(),
    }
}

/// Maps a percentage to its letter grade via the fixed threshold table.
#[must_use]
pub fn grade_for_percentage(percentage: f64) -> &'static str {
    GRADE_THRESHOLDS
        .iter()
        .find(|(cutoff, _)| percentage >= *cutoff)
        .map_or("F", |(_, grade)| grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(marks: u32, total: u32) -> SubjectScore {
        SubjectScore {
            name: "Subject".to_string(),
            marks,
            total_marks: total,
            grade: "N/A".to_string(),
        }
    }

    #[test]
    fn grade_boundaries_are_exact() {
        let expected = [
            (90.0, "A+"),
            (85.0, "A"),
            (80.0, "A-"),
            (75.0, "B+"),
            (70.0, "B"),
            (65.0, "B-"),
            (60.0, "C+"),
            (55.0, "C"),
            (50.0, "C-"),
            (40.0, "D"),
        ];
        for (cutoff, grade) in expected {
            assert_eq!(grade_for_percentage(cutoff), grade, "at {cutoff}");
            assert_ne!(grade_for_percentage(cutoff - 1e-4), grade, "below {cutoff}");
        }
        assert_eq!(grade_for_percentage(89.9999), "A");
        assert_eq!(grade_for_percentage(100.0), "A+");
        assert_eq!(grade_for_percentage(0.0), "F");
        assert_eq!(grade_for_percentage(39.9999), "F");
    }

    #[test]
    fn aggregation_computes_percentage_within_tolerance() {
        let subjects = vec![subject(40, 50), subject(45, 50)];
        let overall = aggregate(&subjects);
        assert_eq!(overall.total_marks, 100);
        assert_eq!(overall.obtained_marks, 85);
        assert!((overall.percentage - 85.0).abs() < 1e-6);
        assert_eq!(overall.grade, "A");
    }

    #[test]
    fn zero_total_marks_is_guarded_to_zero_percent() {
        let overall = aggregate(&[]);
        assert_eq!(overall.total_marks, 0);
        assert_eq!(overall.obtained_marks, 0);
        assert!(overall.percentage.abs() < f64::EPSILON);
        assert_eq!(overall.grade, "F");
    }

    #[test]
    fn oversized_rows_saturate_instead_of_overflowing() {
        // Two rows whose sums exceed u32::MAX. The marks saturate; the
        // percentage still comes from the wide sums.
        let subjects = vec![
            subject(3_000_000_000, 3_000_000_000),
            subject(3_000_000_000, 3_000_000_000),
        ];
        let overall = aggregate(&subjects);
        assert_eq!(overall.total_marks, u32::MAX);
        assert_eq!(overall.obtained_marks, u32::MAX);
        assert!((overall.percentage - 100.0).abs() < 1e-6);
        assert_eq!(overall.grade, "A+");
    }

    #[test]
    fn duplicate_rows_are_summed() {
        let subjects = vec![subject(40, 50), subject(45, 50)];
        let overall = aggregate(&subjects);
        assert_eq!(overall.obtained_marks, 85);
    }

    #[test]
    fn explicit_total_is_taken_verbatim() {
        let overall = explicit_overall("Total: 280/300 (93.3%) Grade: A+").unwrap();
        assert_eq!(overall.obtained_marks, 280);
        assert_eq!(overall.total_marks, 300);
        assert!((overall.percentage - 93.3).abs() < 1e-6);
        assert_eq!(overall.grade, "A+");
    }

    #[test]
    fn explicit_total_wins_without_cross_checking() {
        // Subject rows sum to 250/300, the stated line says 280/300.
        let subjects = vec![subject(80, 100), subject(90, 100), subject(80, 100)];
        let overall = resolve("Total: 280/300 (93.3%) Grade: A+", &subjects);
        assert_eq!(overall.obtained_marks, 280);
        assert_eq!(overall.total_marks, 300);
    }

    #[test]
    fn missing_explicit_total_falls_back_to_aggregation() {
        let subjects = vec![subject(40, 50)];
        let overall = resolve("Mathematics: 40/50 (B)", &subjects);
        assert_eq!(overall.total_marks, 50);
        assert!((overall.percentage - 80.0).abs() < 1e-6);
        assert_eq!(overall.grade, "A-");
    }

    #[test]
    fn integer_percentage_parses_in_explicit_total() {
        let overall = explicit_overall("total: 90 / 100 (90%) grade: a+").unwrap();
        assert!((overall.percentage - 90.0).abs() < f64::EPSILON);
        assert_eq!(overall.grade, "a+");
    }
}
