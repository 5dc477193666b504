use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    apis::api_models::{
        request::{parse_body, VideoCommentsRequest},
        response::{DetailsComment, VideoDetailsResponse},
    },
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

pub const TAG: &str = "videos";

/// Get video details together with all of its comments
#[utoipa::path(
    post,
    tag = TAG,
    path = "/details",
    operation_id = "getVideoDetails",
    request_body = VideoCommentsRequest,
    responses(
        (status = 200, description = "Video details and comments", body = VideoDetailsResponse),
        (status = 400, description = "video_url missing or invalid, or no API key available", body = ErrorPayload),
        (status = 404, description = "Video not found", body = ErrorPayload),
        (status = 500, description = "YouTube API call failed", body = ErrorPayload)
    )
)]
pub(super) async fn get_video_details(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<VideoCommentsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VideoDetailsResponse>), AppError> {
    let (api_key, video_id) =
        parse_body(payload)?.validate(app_state.default_api_key.as_ref())?;

    let video_details = app_state
        .video_service
        .get_video_details(&api_key, &video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    let comments = app_state
        .comment_service
        .fetch_video_comments(&api_key, &video_id)
        .await?;
    info!(
        "Returning details for video {} with {} comments",
        video_id,
        comments.len()
    );

    Ok((
        StatusCode::OK,
        Json(VideoDetailsResponse {
            video_details,
            comments: comments.into_iter().map(DetailsComment::from).collect(),
        }),
    ))
}
