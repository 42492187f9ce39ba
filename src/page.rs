use super::*;

/// One page of a list response. Items stay undecoded until the caller asks
/// for them, so one item of an unexpected shape doesn't spoil the page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page {
  items: Option<Vec<Value>>,
  pub(crate) next_page_token: Option<String>,
}

impl Page {
  pub(crate) fn item_count(&self) -> usize {
    self.items.as_ref().map_or(0, Vec::len)
  }

  /// Decodes each item in order, yielding `None` for items that don't have
  /// the shape of `T`.
  pub(crate) fn items<T: DeserializeOwned>(
    self,
  ) -> impl Iterator<Item = Option<T>> {
    self
      .items
      .unwrap_or_default()
      .into_iter()
      .map(|item| match serde_json::from_value(item) {
        Ok(item) => Some(item),
        Err(error) => {
          tracing::debug!(%error, "skipping malformed item");
          None
        }
      })
  }
}
