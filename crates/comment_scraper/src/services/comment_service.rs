use std::{collections::VecDeque, sync::Arc};

use futures_util::{
    stream::{self, BoxStream},
    StreamExt, TryStreamExt,
};
use tracing::{debug, info, instrument};

use crate::{
    external_services::youtube::{
        comment_threads::CommentThread, ApiKey, YoutubeApi, YoutubeError,
    },
    models::comments::CommentRecord,
};

/// Lazily paginated comment records for one video. Pages are requested only
/// as the stream is polled; the stream cannot be restarted.
pub type CommentStream<'a> = BoxStream<'a, Result<CommentRecord, YoutubeError>>;

/// Position in the `commentThreads` pagination of a single video.
#[derive(Default)]
struct ThreadCursor {
    pending: VecDeque<CommentThread>,
    page_token: Option<String>,
    exhausted: bool,
    pages: u32,
}

#[derive(Clone)]
pub struct CommentService {
    youtube: Arc<dyn YoutubeApi>,
}

impl CommentService {
    pub fn new(youtube: Arc<dyn YoutubeApi>) -> Self {
        CommentService { youtube }
    }

    /// Every top-level comment of `video_id`, each immediately followed by
    /// its replies. Any failed call ends the stream with that error.
    pub fn stream_video_comments<'a>(
        &'a self,
        api_key: &'a ApiKey,
        video_id: &'a str,
    ) -> CommentStream<'a> {
        stream::try_unfold(ThreadCursor::default(), move |cursor| {
            self.next_thread(api_key, video_id, cursor)
        })
        .map_ok(|records| stream::iter(records.into_iter().map(Ok::<_, YoutubeError>)))
        .try_flatten()
        .boxed()
    }

    #[instrument(skip(self, api_key))]
    pub async fn fetch_video_comments(
        &self,
        api_key: &ApiKey,
        video_id: &str,
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let comments: Vec<CommentRecord> = self
            .stream_video_comments(api_key, video_id)
            .try_collect()
            .await?;
        info!("Fetched {} comments for video {}", comments.len(), video_id);
        Ok(comments)
    }

    /// Fetches the videos one after another and concatenates their records
    /// in the order given.
    pub async fn fetch_comments_for_videos(
        &self,
        api_key: &ApiKey,
        video_ids: &[String],
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let mut all_comments = Vec::new();
        for video_id in video_ids {
            all_comments.extend(self.fetch_video_comments(api_key, video_id).await?);
        }
        Ok(all_comments)
    }

    async fn next_thread(
        &self,
        api_key: &ApiKey,
        video_id: &str,
        mut cursor: ThreadCursor,
    ) -> Result<Option<(Vec<CommentRecord>, ThreadCursor)>, YoutubeError> {
        loop {
            if let Some(thread) = cursor.pending.pop_front() {
                let records = self.thread_records(api_key, video_id, thread).await?;
                return Ok(Some((records, cursor)));
            }
            if cursor.exhausted {
                return Ok(None);
            }

            let page = self
                .youtube
                .list_comment_threads(api_key, video_id, cursor.page_token.as_deref())
                .await?;
            cursor.pages += 1;
            debug!(
                "Comment thread page {} for video {}: {} threads",
                cursor.pages,
                video_id,
                page.items.len()
            );
            cursor.page_token = page.next_page();
            cursor.exhausted = cursor.page_token.is_none();
            cursor.pending.extend(page.items);
        }
    }

    async fn thread_records(
        &self,
        api_key: &ApiKey,
        video_id: &str,
        thread: CommentThread,
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let top_level = thread.snippet.top_level_comment;
        let mut records = vec![CommentRecord::from_snippet(video_id, &top_level.snippet)];

        if thread.snippet.total_reply_count > 0 {
            records.extend(
                self.fetch_replies(api_key, &top_level.id, video_id)
                    .await?,
            );
        }

        Ok(records)
    }

    // Same parent id on every page; items are kept exactly as each page returns them.
    #[instrument(skip(self, api_key))]
    async fn fetch_replies(
        &self,
        api_key: &ApiKey,
        parent_id: &str,
        video_id: &str,
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let mut replies = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .youtube
                .list_comment_replies(api_key, parent_id, page_token.as_deref())
                .await?;
            replies.extend(
                page.items
                    .iter()
                    .map(|reply| CommentRecord::from_snippet(video_id, &reply.snippet)),
            );

            page_token = page.next_page();
            if page_token.is_none() {
                break;
            }
        }

        Ok(replies)
    }
}
