use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    external_services::youtube::ApiKey,
    utils::{errors::app_error::AppError, video_url::extract_video_id},
};

/// Unwraps a JSON body, reporting a malformed one as a 400 in the usual error shape.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Deserialize, ToSchema, Default)]
pub struct PlaylistCommentsRequest {
    /// YouTube Data API key used for every call of this request
    pub api_key: Option<String>,
    pub playlist_id: Option<String>,
}

impl PlaylistCommentsRequest {
    pub fn validate(&self) -> Result<(ApiKey, String), AppError> {
        let api_key = ApiKey::from_optional(self.api_key.as_deref());
        let playlist_id = non_blank(self.playlist_id.as_deref());

        match (api_key, playlist_id) {
            (Some(api_key), Some(playlist_id)) => Ok((api_key, playlist_id.to_string())),
            _ => Err(AppError::BadRequest(
                "api_key and playlist_id are required".to_string(),
            )),
        }
    }
}

#[derive(Deserialize, ToSchema, Default)]
pub struct VideoCommentsRequest {
    /// Watch, short-link or embed URL of the video
    pub video_url: Option<String>,
    /// Overrides the server's configured key
    pub api_key: Option<String>,
}

impl VideoCommentsRequest {
    /// Returns the key to use and the extracted video id.
    pub fn validate(&self, default_api_key: Option<&ApiKey>) -> Result<(ApiKey, String), AppError> {
        let video_url = non_blank(self.video_url.as_deref())
            .ok_or_else(|| AppError::BadRequest("video_url is required".to_string()))?;
        let video_id = extract_video_id(video_url)
            .ok_or_else(|| AppError::BadRequest("Invalid YouTube video URL".to_string()))?;
        let api_key = ApiKey::from_optional(self.api_key.as_deref())
            .or_else(|| default_api_key.cloned())
            .ok_or_else(|| AppError::BadRequest("api_key is required".to_string()))?;

        Ok((api_key, video_id))
    }
}
