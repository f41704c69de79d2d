//! Student roster types

use serde::{Deserialize, Serialize};

/// Number of numeric features the classifier consumes
pub const FEATURE_COUNT: usize = 5;

/// Feature columns in training order.
///
/// The classifier artifact records the same list; the order here and in the
/// artifact must match exactly or model load fails.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "years_in_degree",
    "cgpa",
    "attendance",
    "fee_defaults",
    "leave_apps",
];

/// Columns shown verbatim in the report
pub const DISPLAY_COLUMNS: [&str; 4] = ["name", "enrollment", "phone", "course"];

/// One fully-typed student row. Built during feature extraction from a
/// validated raw row; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub enrollment: String,
    pub phone: String,
    pub course: String,
    pub years_in_degree: f64,
    pub cgpa: f64,
    pub attendance: f64,
    pub fee_defaults: f64,
    pub leave_apps: f64,
}

impl StudentRecord {
    /// Feature vector in training column order
    pub fn features(&self) -> FeatureVector {
        FeatureVector::from_values([
            self.years_in_degree,
            self.cgpa,
            self.attendance,
            self.fee_defaults,
            self.leave_apps,
        ])
    }
}

/// Fixed-order numeric input for the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
