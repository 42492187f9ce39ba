use super::*;

/// Collects every comment and reply on a video.
///
/// Threads are visited in listing order. A thread's replies are listed to
/// completion before the next thread is looked at, so each top-level row is
/// immediately followed by its replies.
pub(crate) struct Harvester<'a, X> {
  api_key: &'a str,
  transport: &'a X,
}

impl<'a, X: Transport> Harvester<'a, X> {
  pub(crate) async fn harvest(
    &self,
    video_id: &VideoId,
  ) -> Result<Harvest, Error> {
    let mut harvest = Harvest::default();

    let mut pages = pin!(
      self
        .listing(Endpoint::Threads, video_id.as_str())
        .pages(self.transport)
    );

    while let Some(page) = pages.try_next().await? {
      for thread in page.items::<CommentThread>() {
        let thread = match thread {
          Some(thread) => self.harvest_thread(video_id, thread).await?,
          None => Harvest::skipped_item(),
        };

        harvest.append(thread);
      }
    }

    tracing::info!(
      video_id = %video_id,
      rows = harvest.rows.len(),
      threads = harvest.threads(),
      skipped = harvest.skipped,
      "harvest complete"
    );

    Ok(harvest)
  }

  async fn harvest_replies(
    &self,
    video_id: &VideoId,
    parent_id: &str,
  ) -> Result<Harvest, Error> {
    let mut harvest = Harvest::default();

    let mut pages = pin!(
      self
        .listing(Endpoint::Replies, parent_id)
        .pages(self.transport)
    );

    while let Some(page) = pages.try_next().await? {
      for reply in page.items::<Comment>() {
        let reply = reply.and_then(|reply| {
          reply.id.filter(|id| !id.is_empty()).zip(reply.snippet)
        });

        match reply {
          Some((id, snippet)) => harvest
            .rows
            .push(CommentRow::new(id, parent_id, video_id, snippet)),
          None => harvest.skipped += 1,
        }
      }
    }

    tracing::debug!(parent_id, replies = harvest.rows.len(), "listed replies");

    Ok(harvest)
  }

  async fn harvest_thread(
    &self,
    video_id: &VideoId,
    thread: CommentThread,
  ) -> Result<Harvest, Error> {
    let Some(ThreadSnippet {
      top_level_comment: Some(top_level_comment),
      total_reply_count,
    }) = thread.snippet
    else {
      return Ok(Harvest::skipped_item());
    };

    let Some(id) = top_level_comment.id.filter(|id| !id.is_empty()) else {
      return Ok(Harvest::skipped_item());
    };

    let mut harvest = top_level_comment.snippet.map_or_else(
      Harvest::skipped_item,
      |snippet| Harvest {
        rows: vec![CommentRow::new(id.clone(), "", video_id, snippet)],
        skipped: 0,
      },
    );

    if total_reply_count.unwrap_or_default() > 0 {
      harvest.append(self.harvest_replies(video_id, &id).await?);
    }

    Ok(harvest)
  }

  fn listing<'b>(
    &'b self,
    endpoint: Endpoint,
    filter: &'b str,
  ) -> Listing<'b> {
    Listing {
      api_key: self.api_key,
      endpoint,
      filter,
    }
  }

  pub(crate) fn new(api_key: &'a str, transport: &'a X) -> Self {
    Self { api_key, transport }
  }
}
