use super::*;

/// One of the two comment list operations of the Data API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Endpoint {
  /// `comments`, the replies under one top-level comment.
  Replies,
  /// `commentThreads`, the top-level comments on a video.
  Threads,
}

impl Display for Endpoint {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.path())
  }
}

impl Endpoint {
  /// Query parameter that scopes the listing to a video or a parent comment.
  pub(crate) fn filter_param(self) -> &'static str {
    match self {
      Self::Replies => "parentId",
      Self::Threads => "videoId",
    }
  }

  pub(crate) fn path(self) -> &'static str {
    match self {
      Self::Replies => "comments",
      Self::Threads => "commentThreads",
    }
  }
}
