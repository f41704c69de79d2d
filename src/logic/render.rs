//! Report assembly and counselling message templating

use crate::logic::scoring::ScoredStudent;
use crate::models::{CounsellingMessage, DisplayRecord, Report, ReportSummary, RiskTag};

/// Round a probability to a two-decimal percentage.
pub fn probability_pct(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}

/// Coerce a percentage into the bounded progress range.
///
/// Anything that is not a finite value whose integer part lies in 0..=100
/// degrades to 0; the row itself is never failed over the indicator.
pub fn progress_value(pct: f64) -> u8 {
    if !pct.is_finite() {
        return 0;
    }
    let truncated = pct.trunc();
    if (0.0..=100.0).contains(&truncated) {
        truncated as u8
    } else {
        0
    }
}

/// Build the full report for a scored roster: summary counts, one display
/// row per student, one counselling message per student. Single pass, input
/// order preserved.
pub fn render(scored: &[ScoredStudent]) -> Report {
    let mut summary = ReportSummary {
        total: scored.len(),
        ..Default::default()
    };
    let mut rows = Vec::with_capacity(scored.len());
    let mut messages = Vec::with_capacity(scored.len());

    for student in scored {
        let risk = RiskTag::from_label(student.prediction.label);
        match risk {
            RiskTag::AtRisk => summary.at_risk += 1,
            RiskTag::Safe => summary.safe += 1,
        }

        let pct = probability_pct(student.prediction.probability);
        rows.push(DisplayRecord {
            name: student.record.name.clone(),
            enrollment: student.record.enrollment.clone(),
            phone: student.record.phone.clone(),
            course: student.record.course.clone(),
            risk,
            probability_pct: pct,
            progress: progress_value(pct),
        });

        messages.push(counselling_message(
            &student.record.name,
            &student.record.phone,
            risk,
        ));
    }

    Report {
        summary,
        rows,
        messages,
    }
}

/// Fixed two-branch counselling template, keyed by risk tag only. The only
/// per-student substitution is name (and phone, carried for the
/// presentation layer).
pub fn counselling_message(name: &str, phone: &str, risk: RiskTag) -> CounsellingMessage {
    let body = match risk {
        RiskTag::AtRisk => format!(
            "Hello {name}, we noticed some academic challenges.\n\
             Would you like to schedule a counselling session?\n\
             Please reply YES to confirm."
        ),
        RiskTag::Safe => format!(
            "Great job {name}! 🎉 Keep up the good work.\n\
             Stay consistent with your studies and attendance.\n\
             We're here to support you anytime you need guidance."
        ),
    };

    CounsellingMessage {
        name: name.to_string(),
        phone: phone.to_string(),
        risk,
        body,
    }
}
