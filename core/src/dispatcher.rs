//! The single entry point that validates, sends and classifies requests.
//!
//! # Design
//! `Dispatcher` owns a transport and a codec and nothing else, so calls never
//! share state. Every request goes through the same three steps: validate the
//! `(url, kind, payload)` tuple, make exactly one transport call for the
//! verb, and classify the raw response into a `Response`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::classify::classify;
use crate::codec::{Codec, JsonCodec};
use crate::error::{DispatchError, Rejection};
use crate::http::{HttpBody, RequestKind};
use crate::response::{Decoded, Flag, Response, ResultShape};
use crate::transport::{Transport, UreqTransport};
use crate::validate::{validate, validate_url};

/// Payload argument for requests that carry none.
pub const NO_PAYLOAD: Option<&()> = None;

/// Sends GET, POST, PUT and DELETE requests and classifies their outcome.
#[derive(Clone)]
pub struct Dispatcher<T, C = JsonCodec> {
    transport: T,
    codec: C,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_codec(transport, JsonCodec)
    }
}

impl Default for Dispatcher<UreqTransport> {
    fn default() -> Self {
        Self::new(UreqTransport::new())
    }
}

impl<T: Transport, C: Codec> Dispatcher<T, C> {
    pub fn with_codec(transport: T, codec: C) -> Self {
        Self { transport, codec }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request of `kind` to `url` and classifies the response
    /// according to the result shape `S`.
    ///
    /// Fails with `InvalidArgument` before any I/O when the url is blank, a
    /// POST or PUT has no payload, or a DELETE is not asked for as `Flag`.
    /// Non-2xx statuses, blank bodies and undecodable bodies are returned as
    /// classified responses, not errors.
    pub fn send_request<S, P>(
        &self,
        url: &str,
        kind: RequestKind,
        payload: Option<&P>,
    ) -> Result<Response<S::Output>, DispatchError>
    where
        S: ResultShape,
        P: Serialize + ?Sized,
    {
        if let Err(rejection) = validate::<S>(url, kind, payload.is_some()) {
            tracing::warn!(%kind, url, %rejection, "request rejected");
            return Err(rejection.into());
        }

        tracing::debug!(%kind, url, "dispatching request");
        let sent = match kind {
            RequestKind::Get => self.transport.get(url),
            RequestKind::Post => self.transport.post(url, &self.encode(kind, payload)?),
            RequestKind::Put => self.transport.put(url, &self.encode(kind, payload)?),
            RequestKind::Delete => self.transport.delete(url),
        };
        let raw = sent.map_err(|source| {
            tracing::warn!(%kind, url, error = %source, "transport failed");
            DispatchError::Transport {
                kind,
                url: url.to_string(),
                source,
            }
        })?;

        let response = classify::<S, C>(&self.codec, &raw, kind, url);
        tracing::debug!(
            %kind,
            url,
            status = raw.status,
            outcome = ?response.kind(),
            "response classified"
        );
        Ok(response)
    }

    /// Like `send_request`, with the verb given as text. An unknown verb
    /// fails with `Unimplemented` once the url has been checked.
    pub fn send_verb<S, P>(
        &self,
        url: &str,
        verb: &str,
        payload: Option<&P>,
    ) -> Result<Response<S::Output>, DispatchError>
    where
        S: ResultShape,
        P: Serialize + ?Sized,
    {
        validate_url(url)?;
        let kind: RequestKind = verb.parse()?;
        self.send_request::<S, P>(url, kind, payload)
    }

    pub fn get<R: DeserializeOwned>(&self, url: &str) -> Result<Response<R>, DispatchError> {
        self.send_request::<Decoded<R>, ()>(url, RequestKind::Get, NO_PAYLOAD)
    }

    pub fn post<P: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &P,
    ) -> Result<Response<bool>, DispatchError> {
        self.send_request::<Flag, P>(url, RequestKind::Post, Some(payload))
    }

    pub fn put<P: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &P,
    ) -> Result<Response<bool>, DispatchError> {
        self.send_request::<Flag, P>(url, RequestKind::Put, Some(payload))
    }

    pub fn delete(&self, url: &str) -> Result<Response<bool>, DispatchError> {
        self.send_request::<Flag, ()>(url, RequestKind::Delete, NO_PAYLOAD)
    }

    /// GETs `url` and keeps only the decoded value. Every outcome other than
    /// a successful decode yields `None`.
    pub fn fetch<R: DeserializeOwned>(&self, url: &str) -> Result<Option<R>, DispatchError> {
        let response = self.get::<R>(url)?;
        if !response.is_success() {
            tracing::debug!(url, outcome = ?response.kind(), message = response.message(), "fetch returned no data");
            return Ok(None);
        }
        Ok(response.into_data())
    }

    fn encode<P: Serialize + ?Sized>(
        &self,
        kind: RequestKind,
        payload: Option<&P>,
    ) -> Result<HttpBody, DispatchError> {
        let payload = payload.ok_or(Rejection::PayloadRequired { kind })?;
        let content = self.codec.encode(payload).map_err(DispatchError::Encode)?;
        Ok(HttpBody {
            content_type: self.codec.content_type().to_string(),
            content,
        })
    }
}
