//! Roster loading and validation
//!
//! Parses an uploaded CSV into a column-checked raw table. Header case is
//! immaterial (labels are lowercased before the required-set check). Cell
//! contents stay untyped here; feature columns are parsed at scoring time,
//! so a non-numeric cell fails the batch there, not here.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{DISPLAY_COLUMNS, FEATURE_COLUMNS, FEATURE_COUNT};

/// Columns an upload must contain (case-insensitive). Extra columns are
/// tolerated and ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    DISPLAY_COLUMNS[0],
    DISPLAY_COLUMNS[1],
    DISPLAY_COLUMNS[2],
    DISPLAY_COLUMNS[3],
    FEATURE_COLUMNS[0],
    FEATURE_COLUMNS[1],
    FEATURE_COLUMNS[2],
    FEATURE_COLUMNS[3],
    FEATURE_COLUMNS[4],
];

#[derive(Debug, Error)]
pub enum RosterError {
    /// Upload is not parseable CSV
    #[error("could not read CSV: {0}")]
    Parse(#[from] csv::Error),

    /// Required column set not satisfied after header normalization
    #[error("CSV missing required columns. Required: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// One raw roster row: display fields plus the feature cells in training
/// column order, still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub name: String,
    pub enrollment: String,
    pub phone: String,
    pub course: String,
    pub features: [String; FEATURE_COUNT],
}

/// A column-validated upload
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedRoster {
    pub rows: Vec<RawRow>,
}

/// Parse and validate an uploaded CSV.
///
/// Fails fast: a parse error or a missing required column aborts before any
/// row is processed.
pub fn load(input: &[u8]) -> Result<ValidatedRoster, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    // Lowercase headers so case is immaterial; first occurrence wins.
    let mut columns: HashMap<String, usize> = HashMap::new();
    for (idx, label) in reader.headers()?.iter().enumerate() {
        columns.entry(label.to_lowercase()).or_insert(idx);
    }

    if REQUIRED_COLUMNS.iter().any(|c| !columns.contains_key(*c)) {
        let mut required: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        required.sort_unstable();
        return Err(RosterError::MissingColumns(required));
    }

    let cell = |record: &csv::StringRecord, column: &str| -> String {
        columns
            .get(column)
            .and_then(|i| record.get(*i))
            .unwrap_or_default()
            .to_string()
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(RawRow {
            name: cell(&record, "name"),
            enrollment: cell(&record, "enrollment"),
            phone: cell(&record, "phone"),
            course: cell(&record, "course"),
            features: std::array::from_fn(|i| cell(&record, FEATURE_COLUMNS[i])),
        });
    }

    Ok(ValidatedRoster { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CSV: &str = "\
name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps
Asha Verma,EN2021001,9876500001,B.Tech CSE,2,4.5,30,1,7
Rohan Mehta,EN2021002,9876500002,B.Sc Physics,1,9.0,95,0,0
";

    #[test]
    fn test_load_valid_roster() {
        let roster = load(VALID_CSV.as_bytes()).expect("valid CSV should load");
        assert_eq!(roster.rows.len(), 2);
        assert_eq!(roster.rows[0].name, "Asha Verma");
        assert_eq!(roster.rows[0].features[0], "2");
        assert_eq!(roster.rows[0].features[4], "7");
        assert_eq!(roster.rows[1].course, "B.Sc Physics");
    }

    #[test]
    fn test_header_case_is_immaterial() {
        let shouty = VALID_CSV.replacen(
            "name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps",
            "Name,ENROLLMENT,Phone,Course,Years_In_Degree,CGPA,Attendance,Fee_Defaults,Leave_Apps",
            1,
        );
        let lower = load(VALID_CSV.as_bytes()).unwrap();
        let upper = load(shouty.as_bytes()).unwrap();
        assert_eq!(lower, upper, "header case must not change the validated roster");
    }

    #[test]
    fn test_missing_column_lists_required_set() {
        let csv = "\
name,enrollment,phone,course,years_in_degree,attendance,fee_defaults,leave_apps
Asha Verma,EN2021001,9876500001,B.Tech CSE,2,30,1,7
";
        let err = load(csv.as_bytes()).expect_err("cgpa is missing");
        match &err {
            RosterError::MissingColumns(required) => {
                assert_eq!(required.len(), REQUIRED_COLUMNS.len());
                assert!(required.contains(&"cgpa".to_string()));
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
        let msg = err.to_string();
        for column in REQUIRED_COLUMNS {
            assert!(msg.contains(column), "error message must list '{}'", column);
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "\
name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps,hostel
Asha Verma,EN2021001,9876500001,B.Tech CSE,2,4.5,30,1,7,Block A
";
        let roster = load(csv.as_bytes()).expect("extra columns are tolerated");
        assert_eq!(roster.rows.len(), 1);
        assert_eq!(roster.rows[0].name, "Asha Verma");
    }

    #[test]
    fn test_malformed_record_is_a_parse_error() {
        let csv = "\
name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps
Asha Verma,EN2021001,9876500001
";
        let err = load(csv.as_bytes()).expect_err("short record must fail");
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_unterminated_quote_is_a_parse_error() {
        let csv = "\
name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps
\"Asha Verma,EN2021001,9876500001,B.Tech CSE,2,4.5,30,1,7
";
        let err = load(csv.as_bytes()).expect_err("unterminated quote must fail");
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_header_only_roster_is_empty_not_an_error() {
        let csv =
            "name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps\n";
        let roster = load(csv.as_bytes()).expect("header-only CSV is valid");
        assert!(roster.rows.is_empty());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let mut csv = String::from(
            "name,enrollment,phone,course,years_in_degree,cgpa,attendance,fee_defaults,leave_apps\n",
        );
        for i in 0..20 {
            csv.push_str(&format!("S{i},EN{i},555{i},Course,1,8.0,80,0,1\n"));
        }
        let roster = load(csv.as_bytes()).unwrap();
        let names: Vec<&str> = roster.rows.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("S{i}")).collect();
        assert_eq!(names, expected);
    }
}
