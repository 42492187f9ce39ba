use super::*;

/// A video identifier extracted from user input.
///
/// Accepts a bare ID, a watch URL (`?v=`), a short-domain URL, or a shorts
/// URL. Never empty once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VideoId(String);

impl Display for VideoId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl VideoId {
  const MIN_LEN: usize = 6;

  const SHORT_HOST: &str = "youtu.be";

  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  fn from_url(url: &Url) -> Option<String> {
    if url.host_str().unwrap_or_default().contains(Self::SHORT_HOST) {
      return url
        .path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string);
    }

    if let Some((_, value)) = url.query_pairs().find(|(key, _)| key == "v") {
      return Some(value.into_owned()).filter(|value| !value.is_empty());
    }

    let segments = url
      .path_segments()
      .map(|segments| {
        segments
          .filter(|segment| !segment.is_empty())
          .collect::<Vec<_>>()
      })
      .unwrap_or_default();

    segments
      .iter()
      .position(|segment| *segment == "shorts")
      .and_then(|index| segments.get(index + 1))
      .map(|segment| (*segment).to_string())
  }

  fn is_literal(value: &str) -> bool {
    value.len() >= Self::MIN_LEN
      && value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
      && !value.contains("http")
  }

  pub(crate) fn resolve(input: &str) -> Result<Self, ResolutionError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
      return Err(ResolutionError::Empty);
    }

    if Self::is_literal(trimmed) {
      return Ok(Self(trimmed.to_string()));
    }

    let unparseable = || ResolutionError::Unparseable {
      input: trimmed.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|_| unparseable())?;

    Self::from_url(&url).map(Self).ok_or_else(unparseable)
  }
}
