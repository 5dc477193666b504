use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::{models::comments::CommentRecord, utils::errors::app_error::AppError};

pub const COMMENTS_FILENAME: &str = "comments_data.csv";

pub fn comments_to_csv(records: &[CommentRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Renders the records as a CSV download.
pub fn csv_attachment(records: &[CommentRecord], filename: &str) -> Result<Response, AppError> {
    let body = comments_to_csv(records)?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, body).into_response())
}
