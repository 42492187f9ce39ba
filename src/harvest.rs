use super::*;

/// Rows collected by a harvest, in output order.
#[derive(Debug, Default)]
pub(crate) struct Harvest {
  pub(crate) rows: Vec<CommentRow>,
  /// Items dropped because they lacked an id or a snippet.
  pub(crate) skipped: usize,
}

impl Harvest {
  pub(crate) fn append(&mut self, other: Harvest) {
    self.rows.extend(other.rows);
    self.skipped += other.skipped;
  }

  pub(crate) fn skipped_item() -> Self {
    Self {
      rows: Vec::new(),
      skipped: 1,
    }
  }

  /// Number of top-level comments collected.
  pub(crate) fn threads(&self) -> usize {
    self.rows.iter().filter(|row| row.is_top_level()).count()
  }
}
