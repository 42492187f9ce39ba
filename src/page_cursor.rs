/// Continuation marker for a listing. The default cursor requests the first
/// page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PageCursor(String);

impl PageCursor {
  /// Cursor for the page after one that reported `token`, or `None` once the
  /// listing is exhausted.
  pub(crate) fn next(token: Option<&str>) -> Option<Self> {
    token
      .filter(|token| !token.is_empty())
      .map(|token| Self(token.to_string()))
  }

  pub(crate) fn token(&self) -> Option<&str> {
    (!self.0.is_empty()).then_some(self.0.as_str())
  }
}
