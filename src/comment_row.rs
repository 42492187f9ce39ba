use super::*;

/// A normalized comment, one line of the exported table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentRow {
  pub(crate) author: String,
  pub(crate) author_channel_id: String,
  pub(crate) comment_id: String,
  pub(crate) like_count: u64,
  pub(crate) parent_id: String,
  pub(crate) published_at: String,
  pub(crate) text: String,
  pub(crate) video_id: String,
}

impl CommentRow {
  pub(crate) fn is_top_level(&self) -> bool {
    self.parent_id.is_empty()
  }

  pub(crate) fn new(
    comment_id: String,
    parent_id: &str,
    video_id: &VideoId,
    snippet: CommentSnippet,
  ) -> Self {
    Self {
      author: snippet.author_display_name.unwrap_or_default(),
      author_channel_id: snippet
        .author_channel_id
        .and_then(|channel| channel.value)
        .unwrap_or_default(),
      comment_id,
      like_count: snippet.like_count.unwrap_or_default(),
      parent_id: parent_id.to_string(),
      published_at: snippet.published_at.unwrap_or_default(),
      text: snippet.text_display.unwrap_or_default(),
      video_id: video_id.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn video_id() -> VideoId {
    VideoId::resolve("XYZ123").unwrap()
  }

  #[test]
  fn snippet_fields_are_copied() {
    let snippet = serde_json::from_value::<CommentSnippet>(json!({
      "authorDisplayName": "@alice",
      "authorChannelId": { "value": "UC123" },
      "publishedAt": "2024-01-02T03:04:05Z",
      "likeCount": 7,
      "textDisplay": "first!",
      "textOriginal": "first!",
    }))
    .unwrap();

    let row = CommentRow::new("c1".to_string(), "", &video_id(), snippet);

    assert_eq!(
      row,
      CommentRow {
        author: "@alice".to_string(),
        author_channel_id: "UC123".to_string(),
        comment_id: "c1".to_string(),
        like_count: 7,
        parent_id: String::new(),
        published_at: "2024-01-02T03:04:05Z".to_string(),
        text: "first!".to_string(),
        video_id: "XYZ123".to_string(),
      }
    );

    assert!(row.is_top_level());
  }

  #[test]
  fn missing_fields_default_to_empty_or_zero() {
    let snippet =
      serde_json::from_value::<CommentSnippet>(json!({ "authorChannelId": {} }))
        .unwrap();

    let row = CommentRow::new("r1".to_string(), "c1", &video_id(), snippet);

    assert_eq!(row.author, "");
    assert_eq!(row.author_channel_id, "");
    assert_eq!(row.like_count, 0);
    assert_eq!(row.published_at, "");
    assert_eq!(row.text, "");
    assert_eq!(row.parent_id, "c1");
    assert!(!row.is_top_level());
  }
}
