//! Row scoring
//!
//! Feature extraction plus classifier invocation. Pure and stateless; output
//! order always equals roster row order.

use thiserror::Error;

use crate::logic::classifier::Classifier;
use crate::logic::roster::{RawRow, ValidatedRoster};
use crate::models::{Prediction, StudentRecord, FEATURE_COLUMNS, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum ScoreError {
    /// Non-numeric cell in a feature column. Aborts the whole batch: no
    /// partial results, the user fixes the CSV and re-uploads.
    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    FeatureType {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// One classified student
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredStudent {
    pub record: StudentRecord,
    pub prediction: Prediction,
}

/// Score every roster row, in order.
pub fn score_roster(
    roster: &ValidatedRoster,
    classifier: &dyn Classifier,
) -> Result<Vec<ScoredStudent>, ScoreError> {
    let mut scored = Vec::with_capacity(roster.rows.len());
    for (idx, raw) in roster.rows.iter().enumerate() {
        let record = extract(idx + 1, raw)?;
        let prediction = classifier.score(&record.features());
        scored.push(ScoredStudent { record, prediction });
    }
    Ok(scored)
}

/// Parse the feature cells of one raw row into a typed record. `row` is the
/// 1-based data row number used in error messages.
fn extract(row: usize, raw: &RawRow) -> Result<StudentRecord, ScoreError> {
    let mut values = [0.0f64; FEATURE_COUNT];
    for (i, cell) in raw.features.iter().enumerate() {
        values[i] = cell
            .parse::<f64>()
            .map_err(|_| ScoreError::FeatureType {
                row,
                column: FEATURE_COLUMNS[i],
                value: cell.clone(),
            })?;
    }

    Ok(StudentRecord {
        name: raw.name.clone(),
        enrollment: raw.enrollment.clone(),
        phone: raw.phone.clone(),
        course: raw.course.clone(),
        years_in_degree: values[0],
        cgpa: values[1],
        attendance: values[2],
        fee_defaults: values[3],
        leave_apps: values[4],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureVector;

    /// Deterministic stand-in for the trained artifact: label 1 iff
    /// attendance (feature index 2) is below 50.
    struct AttendanceStub;

    impl Classifier for AttendanceStub {
        fn predict(&self, features: &FeatureVector) -> u8 {
            (features.values[2] < 50.0) as u8
        }

        fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
            let p = if features.values[2] < 50.0 { 0.9 } else { 0.1 };
            [1.0 - p, p]
        }
    }

    fn raw_row(name: &str, features: [&str; FEATURE_COUNT]) -> RawRow {
        RawRow {
            name: name.to_string(),
            enrollment: format!("EN-{name}"),
            phone: "9876500000".to_string(),
            course: "B.Tech CSE".to_string(),
            features: features.map(|f| f.to_string()),
        }
    }

    #[test]
    fn test_scoring_preserves_row_order() {
        let roster = ValidatedRoster {
            rows: vec![
                raw_row("C", ["1", "8.0", "90", "0", "1"]),
                raw_row("A", ["2", "4.5", "30", "1", "7"]),
                raw_row("B", ["3", "6.0", "55", "1", "4"]),
            ],
        };
        let scored = score_roster(&roster, &AttendanceStub).unwrap();
        let names: Vec<&str> = scored.iter().map(|s| s.record.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"], "output order must equal input order");
    }

    #[test]
    fn test_labels_and_probabilities() {
        let roster = ValidatedRoster {
            rows: vec![
                raw_row("risky", ["2", "4.5", "30", "1", "7"]),
                raw_row("safe", ["1", "9.0", "95", "0", "0"]),
            ],
        };
        let scored = score_roster(&roster, &AttendanceStub).unwrap();
        assert_eq!(scored[0].prediction.label, 1);
        assert_eq!(scored[0].prediction.probability, 0.9);
        assert_eq!(scored[1].prediction.label, 0);
        assert_eq!(scored[1].prediction.probability, 0.1);
    }

    #[test]
    fn test_feature_extraction_is_order_sensitive() {
        let roster = ValidatedRoster {
            rows: vec![raw_row("x", ["2", "4.5", "30", "1", "7"])],
        };
        let scored = score_roster(&roster, &AttendanceStub).unwrap();
        let record = &scored[0].record;
        assert_eq!(record.years_in_degree, 2.0);
        assert_eq!(record.cgpa, 4.5);
        assert_eq!(record.attendance, 30.0);
        assert_eq!(record.fee_defaults, 1.0);
        assert_eq!(record.leave_apps, 7.0);
        assert_eq!(
            record.features().values,
            [2.0, 4.5, 30.0, 1.0, 7.0],
            "feature vector must follow training column order"
        );
    }

    #[test]
    fn test_non_numeric_cell_aborts_the_batch() {
        let roster = ValidatedRoster {
            rows: vec![
                raw_row("fine", ["1", "8.0", "90", "0", "1"]),
                raw_row("broken", ["2", "N/A", "30", "1", "7"]),
                raw_row("never-reached", ["3", "6.0", "55", "1", "4"]),
            ],
        };
        let err = score_roster(&roster, &AttendanceStub).expect_err("bad cell must fail all");
        match err {
            ScoreError::FeatureType { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "cgpa");
                assert_eq!(value, "N/A");
            }
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let roster = ValidatedRoster {
            rows: vec![
                raw_row("a", ["2", "4.5", "30", "1", "7"]),
                raw_row("b", ["1", "9.0", "95", "0", "0"]),
            ],
        };
        let first = score_roster(&roster, &AttendanceStub).unwrap();
        let second = score_roster(&roster, &AttendanceStub).unwrap();
        assert_eq!(first, second, "same roster and classifier must score identically");
    }
}
