use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::external_services::youtube::{ApiKey, YoutubeApi, YoutubeError};

#[derive(Clone)]
pub struct PlaylistService {
    youtube: Arc<dyn YoutubeApi>,
}

impl PlaylistService {
    pub fn new(youtube: Arc<dyn YoutubeApi>) -> Self {
        PlaylistService { youtube }
    }

    /// Video ids of every playlist, in playlist order then item order.
    /// A video listed twice is returned twice.
    #[instrument(skip(self, api_key))]
    pub async fn resolve_video_ids(
        &self,
        api_key: &ApiKey,
        playlist_ids: &[String],
    ) -> Result<Vec<String>, YoutubeError> {
        let mut all_videos = Vec::new();

        for playlist_id in playlist_ids {
            let mut page_token: Option<String> = None;
            loop {
                let page = self
                    .youtube
                    .list_playlist_items(api_key, playlist_id, page_token.as_deref())
                    .await?;
                debug!(
                    "Playlist {} page returned {} items",
                    playlist_id,
                    page.items.len()
                );
                all_videos.extend(
                    page.items
                        .iter()
                        .map(|item| item.content_details.video_id.clone()),
                );

                page_token = page.next_page();
                if page_token.is_none() {
                    break;
                }
            }
        }

        info!(
            "Resolved {} videos from {} playlists",
            all_videos.len(),
            playlist_ids.len()
        );
        Ok(all_videos)
    }
}
