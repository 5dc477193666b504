use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{comments::CommentRecord, videos::VideoDetails};

#[derive(Serialize, ToSchema)]
pub struct VideoDetailsResponse {
    pub video_details: VideoDetails,
    pub comments: Vec<DetailsComment>,
}

/// A comment row as shown by the dashboard: the CSV columns plus `Cleaned`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailsComment {
    #[serde(flatten)]
    pub record: CommentRecord,
    /// Comment text with whitespace runs collapsed to one space and trimmed
    #[serde(rename = "Cleaned")]
    pub cleaned: String,
}

impl From<CommentRecord> for DetailsComment {
    fn from(record: CommentRecord) -> Self {
        let cleaned = record.comment.split_whitespace().collect::<Vec<_>>().join(" ");
        DetailsComment { record, cleaned }
    }
}
