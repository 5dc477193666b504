use serde::{Deserialize, Serialize};

pub const RESOURCE: &str = "comments";
pub const MAX_RESULTS: u32 = 100;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentsQuery<'a> {
    pub part: &'a str,
    pub parent_id: &'a str,
    pub text_format: &'a str,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<&'a str>,
}

impl<'a> CommentsQuery<'a> {
    pub fn new(parent_id: &'a str, page_token: Option<&'a str>) -> Self {
        Self {
            part: "snippet",
            parent_id,
            text_format: "plainText",
            max_results: MAX_RESULTS,
            page_token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub text_display: String,
    pub published_at: String,
    pub updated_at: Option<String>,
    pub parent_id: Option<String>,
}
