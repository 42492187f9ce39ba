use super::*;

const MAX_RESULTS: &str = "100";

const PART: &str = "snippet";

const TEXT_FORMAT: &str = "plainText";

/// A paginated listing of one endpoint, scoped by a video or parent comment
/// id.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Listing<'a> {
  pub(crate) api_key: &'a str,
  pub(crate) endpoint: Endpoint,
  pub(crate) filter: &'a str,
}

impl<'a> Listing<'a> {
  async fn fetch_page<X: Transport>(
    self,
    transport: &X,
    cursor: &PageCursor,
  ) -> Result<Page, Error> {
    let mut query = vec![
      ("part", PART),
      (self.endpoint.filter_param(), self.filter),
      ("maxResults", MAX_RESULTS),
      ("textFormat", TEXT_FORMAT),
      ("key", self.api_key),
    ];

    if let Some(token) = cursor.token() {
      query.push(("pageToken", token));
    }

    let response = transport.get(self.endpoint, &query).await?;

    if !response.is_success() {
      return Err(
        FetchError {
          body: response.body,
          endpoint: self.endpoint,
          status: response.status,
        }
        .into(),
      );
    }

    serde_json::from_str(&response.body).map_err(|source| Error::Decode {
      endpoint: self.endpoint,
      source,
    })
  }

  /// Pages of the listing, in order. Each page is requested only after the
  /// previous one has been consumed, and the stream ends after the first
  /// page without a next page token.
  pub(crate) fn pages<X: Transport + 'a>(
    self,
    transport: &'a X,
  ) -> impl Stream<Item = Result<Page, Error>> + 'a {
    stream::try_unfold(Some(PageCursor::default()), move |cursor| async move {
      let Some(cursor) = cursor else {
        return Ok(None);
      };

      let page = self.fetch_page(transport, &cursor).await?;

      tracing::debug!(
        endpoint = %self.endpoint,
        filter = self.filter,
        continued = cursor.token().is_some(),
        items = page.item_count(),
        "fetched page"
      );

      let next = PageCursor::next(page.next_page_token.as_deref());

      Ok::<_, Error>(Some((page, next)))
    })
  }
}
