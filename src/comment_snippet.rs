use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct AuthorChannelId {
  pub(crate) value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  pub(crate) author_channel_id: Option<AuthorChannelId>,
  pub(crate) author_display_name: Option<String>,
  pub(crate) like_count: Option<u64>,
  pub(crate) published_at: Option<String>,
  pub(crate) text_display: Option<String>,
}
