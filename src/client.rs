use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const DEFAULT_BASE_URL: &str =
    "https://www.googleapis.com/youtube/v3";

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  fn url(&self, endpoint: Endpoint) -> String {
    format!("{}/{}", self.base_url, endpoint.path())
  }
}

impl Transport for Client {
  async fn get(
    &self,
    endpoint: Endpoint,
    query: &[(&str, &str)],
  ) -> Result<Response, Error> {
    // The request URL carries the API key, keep it out of error messages.
    let request_error = |source: reqwest::Error| Error::Request {
      endpoint,
      source: source.without_url(),
    };

    let response = self
      .client
      .get(self.url(endpoint))
      .query(query)
      .send()
      .await
      .map_err(request_error)?;

    let status = response.status().as_u16();

    let body = response.text().await.map_err(request_error)?;

    Ok(Response { body, status })
  }
}
