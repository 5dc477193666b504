pub mod comment_threads;
pub mod comments;
pub mod playlist_items;
pub mod videos;

use std::fmt;

use async_trait::async_trait;
use comment_threads::{CommentThread, CommentThreadsQuery};
use comments::{Comment, CommentsQuery};
use playlist_items::{PlaylistItem, PlaylistItemsQuery};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, error};
use videos::{Video, VideosQuery};

pub const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a key from optional user input, treating blank strings as absent.
    pub fn from_optional(key: Option<&str>) -> Option<Self> {
        key.map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| Self(k.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum YoutubeError {
    #[error("YouTube API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("YouTube API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Unexpected YouTube API response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl YoutubeError {
    /// Builds an `ApiError` from a non-2xx response, preferring the message
    /// Google puts in `{"error": {"message": ...}}`.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        YoutubeError::ApiError { status, message }
    }
}

/// One page of any `*.list` call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub next_page_token: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    /// The continuation token, or `None` once the last page has been reached.
    /// An empty token ends pagination like a missing one.
    pub fn next_page(&self) -> Option<String> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// The remote list operations the scraper depends on.
#[async_trait]
pub trait YoutubeApi: Send + Sync {
    async fn list_comment_threads(
        &self,
        api_key: &ApiKey,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThread>, YoutubeError>;

    async fn list_comment_replies(
        &self,
        api_key: &ApiKey,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<Comment>, YoutubeError>;

    async fn list_playlist_items(
        &self,
        api_key: &ApiKey,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItem>, YoutubeError>;

    async fn list_videos(
        &self,
        api_key: &ApiKey,
        video_id: &str,
    ) -> Result<ListResponse<Video>, YoutubeError>;
}

pub struct YoutubeService {
    client: Client,
    base_url: String,
}

impl YoutubeService {
    pub fn new(base_url: String) -> Self {
        let client = Client::new();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_resource<Q, T>(
        &self,
        resource: &str,
        api_key: &ApiKey,
        query: &Q,
    ) -> Result<T, YoutubeError>
    where
        Q: Serialize + fmt::Debug + ?Sized,
        T: DeserializeOwned,
    {
        debug!("Requesting YouTube {} with query: {:?}", resource, query);
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, resource))
            .query(&[("key", api_key.expose())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("Error requesting YouTube {}: {}", resource, e);
                YoutubeError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = YoutubeError::from_response_body(status.as_u16(), &body);
            error!("YouTube {} failed: {}", resource, err);
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Error deserializing YouTube {}: {}", resource, e);
            YoutubeError::from(e)
        })
    }
}

#[async_trait]
impl YoutubeApi for YoutubeService {
    async fn list_comment_threads(
        &self,
        api_key: &ApiKey,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThread>, YoutubeError> {
        let query = CommentThreadsQuery::new(video_id, page_token);
        self.get_resource(comment_threads::RESOURCE, api_key, &query)
            .await
    }

    async fn list_comment_replies(
        &self,
        api_key: &ApiKey,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<Comment>, YoutubeError> {
        let query = CommentsQuery::new(parent_id, page_token);
        self.get_resource(comments::RESOURCE, api_key, &query).await
    }

    async fn list_playlist_items(
        &self,
        api_key: &ApiKey,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItem>, YoutubeError> {
        let query = PlaylistItemsQuery::new(playlist_id, page_token);
        self.get_resource(playlist_items::RESOURCE, api_key, &query)
            .await
    }

    async fn list_videos(
        &self,
        api_key: &ApiKey,
        video_id: &str,
    ) -> Result<ListResponse<Video>, YoutubeError> {
        let query = VideosQuery::new(video_id);
        self.get_resource(videos::RESOURCE, api_key, &query).await
    }
}
