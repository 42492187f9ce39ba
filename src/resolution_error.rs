use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ResolutionError {
  #[error("no video ID or URL was given")]
  Empty,
  #[error("could not parse a video ID from input: {input}")]
  Unparseable { input: String },
}
