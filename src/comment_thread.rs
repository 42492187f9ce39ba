use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
  pub(crate) snippet: Option<ThreadSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: Option<Comment>,
  pub(crate) total_reply_count: Option<u64>,
}
