use super::*;

#[derive(Debug, Error)]
pub(crate) enum Error {
  #[error("failed to decode {endpoint} response")]
  Decode {
    endpoint: Endpoint,
    source: serde_json::Error,
  },
  #[error("failed to encode comment table")]
  Encode(#[from] csv::Error),
  #[error(transparent)]
  Fetch(#[from] FetchError),
  #[error("request to {endpoint} failed")]
  Request {
    endpoint: Endpoint,
    source: reqwest::Error,
  },
  #[error(transparent)]
  Resolution(#[from] ResolutionError),
}
