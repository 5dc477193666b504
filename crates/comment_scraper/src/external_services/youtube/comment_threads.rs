use serde::{Deserialize, Serialize};

use super::comments::Comment;

pub const RESOURCE: &str = "commentThreads";
pub const MAX_RESULTS: u32 = 100;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadsQuery<'a> {
    pub part: &'a str,
    pub video_id: &'a str,
    pub text_format: &'a str,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<&'a str>,
}

impl<'a> CommentThreadsQuery<'a> {
    pub fn new(video_id: &'a str, page_token: Option<&'a str>) -> Self {
        Self {
            part: "snippet",
            video_id,
            text_format: "plainText",
            max_results: MAX_RESULTS,
            page_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Comment,
    #[serde(default)]
    pub total_reply_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external_services::youtube::ListResponse;

    #[test]
    fn should_deserialize_comment_thread_page() {
        let json = r#"{
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 100 },
            "items": [{
                "kind": "youtube#commentThread",
                "id": "UgzThread",
                "snippet": {
                    "channelId": "UCchannel",
                    "videoId": "abcDEF12345",
                    "topLevelComment": {
                        "kind": "youtube#comment",
                        "id": "UgzThread",
                        "snippet": {
                            "authorDisplayName": "@viewer",
                            "textDisplay": "great video",
                            "textOriginal": "great video",
                            "publishedAt": "2024-03-01T10:00:00Z",
                            "updatedAt": "2024-03-02T11:00:00Z"
                        }
                    },
                    "canReply": true,
                    "totalReplyCount": 2,
                    "isPublic": true
                }
            }]
        }"#;

        let page: ListResponse<CommentThread> = serde_json::from_str(json).unwrap();

        assert_eq!(page.next_page(), Some("QURTSl9p".to_string()));
        let thread = &page.items[0];
        assert_eq!(thread.snippet.total_reply_count, 2);
        assert_eq!(thread.snippet.top_level_comment.id, "UgzThread");
        assert_eq!(
            thread.snippet.top_level_comment.snippet.author_display_name,
            "@viewer"
        );
    }

    #[test]
    fn should_serialize_query_without_page_token_on_first_page() {
        let query = serde_json::to_value(CommentThreadsQuery::new("abcDEF12345", None)).unwrap();

        assert_eq!(query["videoId"], "abcDEF12345");
        assert_eq!(query["maxResults"], 100);
        assert_eq!(query["textFormat"], "plainText");
        assert!(query.get("pageToken").is_none());
    }
}
