use super::*;

pub(crate) const COLUMNS: [&str; 8] = [
  "comment_id",
  "parent_id",
  "video_id",
  "author",
  "author_channel_id",
  "published_at",
  "like_count",
  "text",
];

/// Encodes rows as CSV: a header line, then one line per row, each line
/// terminated by `\n`.
///
/// A field is quoted only when it contains a comma, a double quote, `\n`,
/// or `\r`, and quotes inside a quoted field are doubled. A lone `\r` is
/// quoted too so spreadsheet readers never see it as a line break.
pub(crate) fn encode(rows: &[CommentRow]) -> Result<Vec<u8>, Error> {
  let mut writer = csv::WriterBuilder::new()
    .terminator(Terminator::Any(b'\n'))
    .quote_style(QuoteStyle::Necessary)
    .from_writer(Vec::new());

  writer.write_record(COLUMNS)?;

  for row in rows {
    writer.write_record([
      row.comment_id.as_str(),
      row.parent_id.as_str(),
      row.video_id.as_str(),
      row.author.as_str(),
      row.author_channel_id.as_str(),
      row.published_at.as_str(),
      row.like_count.to_string().as_str(),
      row.text.as_str(),
    ])?;
  }

  writer
    .into_inner()
    .map_err(|error| csv::Error::from(error.into_error()).into())
}
