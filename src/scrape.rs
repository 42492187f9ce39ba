use super::*;

/// Resolves `input` to a video, harvests all of its comments, and encodes
/// them as a table. Nothing is returned unless every page was fetched.
pub(crate) async fn scrape<X: Transport>(
  transport: &X,
  api_key: &str,
  input: &str,
) -> Result<Export, Error> {
  let video_id = VideoId::resolve(input)?;

  let harvest = Harvester::new(api_key, transport).harvest(&video_id).await?;

  if harvest.skipped > 0 {
    tracing::warn!(
      skipped = harvest.skipped,
      "skipped comments with a missing id or snippet"
    );
  }

  let bytes = table_encoder::encode(&harvest.rows)?;

  Ok(Export::new(&video_id, bytes, harvest.rows.len()))
}
