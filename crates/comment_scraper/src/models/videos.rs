use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::external_services::youtube::videos::{Thumbnail, Video};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
    pub description: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub privacy_status: Option<String>,
    pub tags: Vec<String>,
    pub thumbnails: BTreeMap<String, Thumbnail>,
}

impl From<Video> for VideoDetails {
    fn from(video: Video) -> Self {
        VideoDetails {
            video_id: video.id,
            title: video.snippet.title,
            channel_title: video.snippet.channel_title,
            published_at: video.snippet.published_at,
            description: video.snippet.description,
            view_count: video.statistics.view_count,
            like_count: video.statistics.like_count,
            comment_count: video.statistics.comment_count,
            privacy_status: video.status.and_then(|s| s.privacy_status),
            tags: video.snippet.tags,
            thumbnails: video.snippet.thumbnails,
        }
    }
}
