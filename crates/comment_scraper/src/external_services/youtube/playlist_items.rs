use serde::{Deserialize, Serialize};

pub const RESOURCE: &str = "playlistItems";
pub const MAX_RESULTS: u32 = 50;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsQuery<'a> {
    pub part: &'a str,
    pub playlist_id: &'a str,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<&'a str>,
}

impl<'a> PlaylistItemsQuery<'a> {
    pub fn new(playlist_id: &'a str, page_token: Option<&'a str>) -> Self {
        Self {
            part: "contentDetails",
            playlist_id,
            max_results: MAX_RESULTS,
            page_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}
