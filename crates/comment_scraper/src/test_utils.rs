use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::external_services::youtube::{
    comment_threads::{CommentThread, CommentThreadSnippet},
    comments::{Comment, CommentSnippet},
    playlist_items::{PlaylistItem, PlaylistItemContentDetails},
    videos::{Video, VideoSnippet, VideoStatistics, VideoStatus},
    ApiKey, ListResponse, YoutubeApi, YoutubeError,
};

type PageKey = (String, Option<String>);

/// Scripted in-memory YouTube API. Every call is recorded as
/// `resource:id:token` so tests can assert on the request sequence.
#[derive(Default)]
pub struct FakeYoutube {
    thread_pages: HashMap<PageKey, ListResponse<CommentThread>>,
    reply_pages: HashMap<PageKey, ListResponse<Comment>>,
    playlist_pages: HashMap<PageKey, ListResponse<PlaylistItem>>,
    videos: HashMap<String, Video>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

fn key(id: &str, token: Option<&str>) -> PageKey {
    (id.to_string(), token.map(str::to_string))
}

fn page<T>(next: Option<&str>, items: Vec<T>) -> ListResponse<T> {
    ListResponse {
        next_page_token: next.map(str::to_string),
        items,
    }
}

impl FakeYoutube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_page(
        mut self,
        video_id: &str,
        token: Option<&str>,
        next: Option<&str>,
        threads: Vec<CommentThread>,
    ) -> Self {
        self.thread_pages
            .insert(key(video_id, token), page(next, threads));
        self
    }

    pub fn with_reply_page(
        mut self,
        parent_id: &str,
        token: Option<&str>,
        next: Option<&str>,
        replies: Vec<Comment>,
    ) -> Self {
        self.reply_pages
            .insert(key(parent_id, token), page(next, replies));
        self
    }

    pub fn with_playlist_page(
        mut self,
        playlist_id: &str,
        token: Option<&str>,
        next: Option<&str>,
        video_ids: &[&str],
    ) -> Self {
        let items = video_ids
            .iter()
            .map(|video_id| PlaylistItem {
                content_details: PlaylistItemContentDetails {
                    video_id: video_id.to_string(),
                },
            })
            .collect();
        self.playlist_pages
            .insert(key(playlist_id, token), page(next, items));
        self
    }

    pub fn with_video(mut self, video: Video) -> Self {
        self.videos.insert(video.id.clone(), video);
        self
    }

    /// Any call whose id (video, parent or playlist) matches fails with a 403.
    pub fn failing_for(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, resource: &str, id: &str, token: Option<&str>) -> Result<(), YoutubeError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}:{}", resource, id, token.unwrap_or("-")));
        if self.failing.contains(id) {
            return Err(YoutubeError::ApiError {
                status: 403,
                message: "The request cannot be completed because you have exceeded your quota."
                    .to_string(),
            });
        }
        Ok(())
    }
}

fn missing(resource: &str, id: &str) -> YoutubeError {
    YoutubeError::ApiError {
        status: 404,
        message: format!("no scripted {} page for {}", resource, id),
    }
}

fn clone_page<T: Clone>(page: &ListResponse<T>) -> ListResponse<T> {
    ListResponse {
        next_page_token: page.next_page_token.clone(),
        items: page.items.clone(),
    }
}

#[async_trait]
impl YoutubeApi for FakeYoutube {
    async fn list_comment_threads(
        &self,
        _api_key: &ApiKey,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<CommentThread>, YoutubeError> {
        self.record("commentThreads", video_id, page_token)?;
        self.thread_pages
            .get(&key(video_id, page_token))
            .map(clone_page)
            .ok_or_else(|| missing("commentThreads", video_id))
    }

    async fn list_comment_replies(
        &self,
        _api_key: &ApiKey,
        parent_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<Comment>, YoutubeError> {
        self.record("comments", parent_id, page_token)?;
        self.reply_pages
            .get(&key(parent_id, page_token))
            .map(clone_page)
            .ok_or_else(|| missing("comments", parent_id))
    }

    async fn list_playlist_items(
        &self,
        _api_key: &ApiKey,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<PlaylistItem>, YoutubeError> {
        self.record("playlistItems", playlist_id, page_token)?;
        self.playlist_pages
            .get(&key(playlist_id, page_token))
            .map(clone_page)
            .ok_or_else(|| missing("playlistItems", playlist_id))
    }

    async fn list_videos(
        &self,
        _api_key: &ApiKey,
        video_id: &str,
    ) -> Result<ListResponse<Video>, YoutubeError> {
        self.record("videos", video_id, None)?;
        let items = self.videos.get(video_id).cloned().into_iter().collect();
        Ok(page(None, items))
    }
}

pub fn thread(id: &str, author: &str, total_reply_count: u32) -> CommentThread {
    CommentThread {
        id: id.to_string(),
        snippet: CommentThreadSnippet {
            top_level_comment: reply(id, None, author),
            total_reply_count,
        },
    }
}

pub fn reply(id: &str, parent_id: Option<&str>, author: &str) -> Comment {
    Comment {
        id: id.to_string(),
        snippet: CommentSnippet {
            author_display_name: author.to_string(),
            text_display: format!("comment {}", id),
            published_at: "2024-03-01T10:00:00Z".to_string(),
            updated_at: None,
            parent_id: parent_id.map(str::to_string),
        },
    }
}

pub fn video(id: &str, title: &str) -> Video {
    Video {
        id: id.to_string(),
        snippet: VideoSnippet {
            title: title.to_string(),
            channel_title: "Example Channel".to_string(),
            published_at: "2024-02-10T08:30:00Z".to_string(),
            ..Default::default()
        },
        statistics: VideoStatistics {
            view_count: Some(1024),
            like_count: Some(64),
            comment_count: Some(3),
        },
        status: Some(VideoStatus {
            privacy_status: Some("public".to_string()),
        }),
    }
}

pub fn api_key() -> ApiKey {
    ApiKey::new("test-key")
}

pub async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}
