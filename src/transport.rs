use super::*;

pub(crate) trait Transport {
  /// Issues a single GET against `endpoint`. Any status is returned as a
  /// `Response`; only failures to complete the exchange are errors.
  async fn get(
    &self,
    endpoint: Endpoint,
    query: &[(&str, &str)],
  ) -> Result<Response, Error>;
}
