//! The transport seam and its ureq-backed implementation.
//!
//! # Design
//! `Transport` is the only thing the dispatcher needs from an HTTP library:
//! one call per verb, each returning status, reason phrase and body as plain
//! data. Error statuses must come back as `Ok(HttpResponse)`; `Err` is for
//! failures where no response exists (DNS, refused connection, broken body).
//! A body that is not UTF-8 is still a response.

use ureq::http::{Response, StatusCode};
use ureq::{Agent, Body};

use crate::error::BoxError;
use crate::http::{HttpBody, HttpResponse};

/// Minimal blocking HTTP client contract.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError>;

    fn post(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError>;

    fn put(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError>;

    fn delete(&self, url: &str) -> Result<HttpResponse, BoxError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).get(url)
    }

    fn post(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError> {
        (**self).post(url, body)
    }

    fn put(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError> {
        (**self).put(url, body)
    }

    fn delete(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).delete(url)
    }
}

/// `Transport` over a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// An agent that returns 4xx/5xx responses as data rather than `Err`.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Uses a caller-configured agent. It must be built with
    /// `http_status_as_error(false)`, otherwise error statuses surface as
    /// transport failures instead of `Failure` responses.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        read(self.agent.get(url).call()?)
    }

    fn post(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError> {
        let response = self
            .agent
            .post(url)
            .content_type(body.content_type.as_str())
            .send(body.content.as_bytes())?;
        read(response)
    }

    fn put(&self, url: &str, body: &HttpBody) -> Result<HttpResponse, BoxError> {
        let response = self
            .agent
            .put(url)
            .content_type(body.content_type.as_str())
            .send(body.content.as_bytes())?;
        read(response)
    }

    fn delete(&self, url: &str) -> Result<HttpResponse, BoxError> {
        read(self.agent.delete(url).call()?)
    }
}

fn read(mut response: Response<Body>) -> Result<HttpResponse, BoxError> {
    let status: StatusCode = response.status();
    // Bodies are only decoded for GET, so neither size nor encoding may fail
    // the exchange; invalid UTF-8 is left for the codec to reject.
    let bytes = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()?;
    Ok(HttpResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().map(str::to_string),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
