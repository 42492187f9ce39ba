use super::*;

/// A comment resource: the top-level comment of a thread, or a reply.
#[derive(Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) id: Option<String>,
  pub(crate) snippet: Option<CommentSnippet>,
}
