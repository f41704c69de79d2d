//! Report types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary risk tag, a pure function of the predicted label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTag {
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Safe")]
    Safe,
}

impl RiskTag {
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            RiskTag::AtRisk
        } else {
            RiskTag::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTag::AtRisk => "At Risk",
            RiskTag::Safe => "Safe",
        }
    }
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output for one feature vector.
///
/// `probability` is the probability of the dropout class (label 1), not the
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: u8,
    pub probability: f64,
}

/// One scored row, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub name: String,
    pub enrollment: String,
    pub phone: String,
    pub course: String,
    pub risk: RiskTag,
    /// Dropout probability as a percentage, rounded to 2 decimals
    pub probability_pct: f64,
    /// Bounded 0-100 indicator; 0 when the percentage cannot be coerced
    pub progress: u8,
}

/// Risk/safe counts; `at_risk + safe == total` always
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct ReportSummary {
    pub total: usize,
    pub at_risk: usize,
    pub safe: usize,
}

/// Templated counselling text for one student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounsellingMessage {
    pub name: String,
    pub phone: String,
    pub risk: RiskTag,
    pub body: String,
}

/// Full report for one uploaded roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub rows: Vec<DisplayRecord>,
    pub messages: Vec<CounsellingMessage>,
}
