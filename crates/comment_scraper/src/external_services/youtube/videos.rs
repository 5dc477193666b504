use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::serde_utils::deserialize_optional_u64_from_str;

pub const RESOURCE: &str = "videos";

#[derive(Serialize, Debug)]
pub struct VideosQuery<'a> {
    pub part: &'a str,
    pub id: &'a str,
}

impl<'a> VideosQuery<'a> {
    pub fn new(video_id: &'a str) -> Self {
        Self {
            part: "snippet,statistics,status",
            id: video_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
    pub status: Option<VideoStatus>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub channel_title: String,
    pub published_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnails: BTreeMap<String, Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Counters arrive as decimal strings and are omitted when hidden by the owner.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "deserialize_optional_u64_from_str")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64_from_str")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64_from_str")]
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub privacy_status: Option<String>,
}
