//! Report handler
//!
//! One request, one full pass: upload → validate → score → render. Nothing
//! about the upload is retained after the response.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::logic::{render, roster, scoring};
use crate::models::{CounsellingMessage, DisplayRecord, Report, ReportSummary};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub summary: ReportSummary,
    pub rows: Vec<DisplayRecord>,
    pub messages: Vec<CounsellingMessage>,
    pub generated_at: i64,
}

/// Score an uploaded roster CSV and build the full report.
pub async fn generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ReportResponse>> {
    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            upload = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let upload = upload.ok_or(AppError::MissingUpload)?;
    if upload.is_empty() {
        return Err(AppError::MissingUpload);
    }

    let roster = roster::load(&upload)?;
    let scored = scoring::score_roster(&roster, state.classifier.as_ref())?;
    let report = render::render(&scored);

    tracing::info!(
        "roster scored: {} students, {} at risk, {} safe",
        report.summary.total,
        report.summary.at_risk,
        report.summary.safe
    );

    let Report {
        summary,
        rows,
        messages,
    } = report;

    Ok(Json(ReportResponse {
        summary,
        rows,
        messages,
        generated_at: Utc::now().timestamp(),
    }))
}
