use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    Json,
};
use tracing::info;

use crate::{
    apis::api_models::request::{parse_body, PlaylistCommentsRequest, VideoCommentsRequest},
    utils::{
        csv_export::{csv_attachment, COMMENTS_FILENAME},
        errors::{app_error::AppError, error_payload::ErrorPayload},
    },
    AppState,
};

pub const TAG: &str = "comments";

/// Download every comment of a playlist as CSV
#[utoipa::path(
    post,
    tag = TAG,
    path = "/playlist",
    operation_id = "scrapePlaylistComments",
    request_body = PlaylistCommentsRequest,
    responses(
        (status = 200, description = "CSV attachment with one row per comment or reply", body = String, content_type = "text/csv"),
        (status = 400, description = "api_key or playlist_id missing", body = ErrorPayload),
        (status = 404, description = "Playlist has no videos or the videos have no comments", body = ErrorPayload),
        (status = 500, description = "YouTube API call failed", body = ErrorPayload)
    )
)]
pub(super) async fn scrape_playlist_comments(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<PlaylistCommentsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let (api_key, playlist_id) = parse_body(payload)?.validate()?;
    info!("Scraping comments for playlist {}", playlist_id);

    let video_ids = app_state
        .playlist_service
        .resolve_video_ids(&api_key, &[playlist_id])
        .await?;
    if video_ids.is_empty() {
        return Err(AppError::NotFound("No videos found in playlist".to_string()));
    }

    let comments = app_state
        .comment_service
        .fetch_comments_for_videos(&api_key, &video_ids)
        .await?;
    if comments.is_empty() {
        return Err(AppError::NotFound("No comments found".to_string()));
    }

    info!(
        "Exporting {} comments from {} videos",
        comments.len(),
        video_ids.len()
    );
    csv_attachment(&comments, COMMENTS_FILENAME)
}

/// Download every comment of a single video as CSV
#[utoipa::path(
    post,
    tag = TAG,
    path = "/video",
    operation_id = "scrapeVideoComments",
    request_body = VideoCommentsRequest,
    responses(
        (status = 200, description = "CSV attachment with one row per comment or reply", body = String, content_type = "text/csv"),
        (status = 400, description = "video_url missing or invalid, or no API key available", body = ErrorPayload),
        (status = 404, description = "The video has no comments", body = ErrorPayload),
        (status = 500, description = "YouTube API call failed", body = ErrorPayload)
    )
)]
pub(super) async fn scrape_video_comments(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<VideoCommentsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let (api_key, video_id) =
        parse_body(payload)?.validate(app_state.default_api_key.as_ref())?;
    info!("Scraping comments for video {}", video_id);

    let comments = app_state
        .comment_service
        .fetch_video_comments(&api_key, &video_id)
        .await?;
    if comments.is_empty() {
        return Err(AppError::NotFound("No comments found".to_string()));
    }

    csv_attachment(&comments, COMMENTS_FILENAME)
}
