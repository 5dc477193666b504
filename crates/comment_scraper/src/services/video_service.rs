use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    external_services::youtube::{ApiKey, YoutubeApi, YoutubeError},
    models::videos::VideoDetails,
};

#[derive(Clone)]
pub struct VideoService {
    youtube: Arc<dyn YoutubeApi>,
}

impl VideoService {
    pub fn new(youtube: Arc<dyn YoutubeApi>) -> Self {
        VideoService { youtube }
    }

    /// `None` when the API knows no video with this id.
    #[instrument(skip(self, api_key))]
    pub async fn get_video_details(
        &self,
        api_key: &ApiKey,
        video_id: &str,
    ) -> Result<Option<VideoDetails>, YoutubeError> {
        let response = self.youtube.list_videos(api_key, video_id).await?;
        let details = response.items.into_iter().next().map(VideoDetails::from);

        if details.is_none() {
            info!("Video {} not found", video_id);
        }
        Ok(details)
    }
}
