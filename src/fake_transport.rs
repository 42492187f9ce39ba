use {
  super::*,
  std::{cell::RefCell, collections::VecDeque},
};

#[derive(Clone, Debug)]
pub(crate) struct FakeRequest {
  pub(crate) endpoint: Endpoint,
  pub(crate) query: Vec<(String, String)>,
}

impl FakeRequest {
  pub(crate) fn param(&self, name: &str) -> Option<&str> {
    self
      .query
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.as_str())
  }
}

/// Answers requests from a scripted queue of responses, in order, and
/// records every request it receives.
pub(crate) struct FakeTransport {
  requests: RefCell<Vec<FakeRequest>>,
  responses: RefCell<VecDeque<Response>>,
}

impl FakeTransport {
  pub(crate) fn new(responses: impl IntoIterator<Item = Response>) -> Self {
    Self {
      requests: RefCell::default(),
      responses: RefCell::new(responses.into_iter().collect()),
    }
  }

  pub(crate) fn requests(&self) -> Vec<FakeRequest> {
    self.requests.borrow().clone()
  }
}

impl Transport for FakeTransport {
  async fn get(
    &self,
    endpoint: Endpoint,
    query: &[(&str, &str)],
  ) -> Result<Response, Error> {
    let request = FakeRequest {
      endpoint,
      query: query
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect(),
    };

    let response = self.responses.borrow_mut().pop_front();

    let response = response.unwrap_or_else(|| {
      panic!("unexpected request: {request:?}");
    });

    self.requests.borrow_mut().push(request);

    Ok(response)
  }
}

impl Response {
  pub(crate) fn json(value: Value) -> Self {
    Self {
      body: value.to_string(),
      status: 200,
    }
  }

  pub(crate) fn status(status: u16, body: &str) -> Self {
    Self {
      body: body.to_string(),
      status,
    }
  }
}
