//! Error handling

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::roster::RosterError;
use crate::logic::scoring::ScoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Upload errors
    MissingUpload,
    InvalidUpload(String),

    // Roster errors
    ParseError(String),
    MissingColumns(String),

    // Scoring errors
    FeatureType(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingUpload => (StatusCode::BAD_REQUEST, "No CSV file in upload"),
            AppError::InvalidUpload(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ParseError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::MissingColumns(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::FeatureType(msg) => {
                tracing::warn!("roster rejected: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg.as_str())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        let msg = err.to_string();
        match err {
            RosterError::Parse(_) => AppError::ParseError(msg),
            RosterError::MissingColumns(_) => AppError::MissingColumns(msg),
        }
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        AppError::FeatureType(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::InvalidUpload(format!("could not read upload: {}", err))
    }
}
