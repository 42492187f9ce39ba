use super::*;

/// A listing request answered with a non-2xx status.
#[derive(Debug, Error)]
#[error("HTTP {status} from {endpoint}: {body}")]
pub(crate) struct FetchError {
  pub(crate) body: String,
  pub(crate) endpoint: Endpoint,
  pub(crate) status: u16,
}
