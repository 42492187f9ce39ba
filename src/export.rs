use super::*;

/// An encoded table ready to hand to an `ExportSink`.
#[derive(Debug)]
pub(crate) struct Export {
  pub(crate) bytes: Vec<u8>,
  pub(crate) row_count: usize,
  pub(crate) suggested_filename: String,
}

impl Export {
  pub(crate) fn new(
    video_id: &VideoId,
    bytes: Vec<u8>,
    row_count: usize,
  ) -> Self {
    Self {
      bytes,
      row_count,
      suggested_filename: format!("{video_id}.csv"),
    }
  }
}
