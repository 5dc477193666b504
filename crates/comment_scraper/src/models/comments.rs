use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::external_services::youtube::comments::CommentSnippet;

/// One row of the exported comment table. Replies and top-level comments
/// share the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentRecord {
    /// Original publish time (ISO-8601)
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    /// Author display name
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "VideoID")]
    pub video_id: String,
    /// Plain-text body
    #[serde(rename = "Comment")]
    pub comment: String,
    /// Last edit time, equal to `Timestamp` when never edited
    #[serde(rename = "Date")]
    pub date: String,
}

impl CommentRecord {
    pub fn from_snippet(video_id: &str, snippet: &CommentSnippet) -> Self {
        CommentRecord {
            timestamp: snippet.published_at.clone(),
            username: snippet.author_display_name.clone(),
            video_id: video_id.to_string(),
            comment: snippet.text_display.clone(),
            date: snippet
                .updated_at
                .clone()
                .unwrap_or_else(|| snippet.published_at.clone()),
        }
    }
}
