use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::external_services::youtube::YoutubeError;

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input; nothing was sent upstream
    #[error("{0}")]
    BadRequest(String),

    /// The upstream calls succeeded but produced nothing to return
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UpstreamError(#[from] YoutubeError),

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CsvError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::CsvError(_) => "CSV_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        let error_response = ErrorPayload {
            error: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
        };

        (status, Json(error_response)).into_response()
    }
}
