//! Error types for the request dispatcher.
//!
//! # Design
//! Only caller mistakes and transport breakdowns are errors. A non-2xx
//! status, an empty body or a body that does not decode are ordinary
//! outcomes and come back as a classified `Response` instead.

use thiserror::Error;

use crate::http::RequestKind;

/// Boxed error returned by transport implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `Dispatcher::send_request` and friends.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request was rejected before any network activity.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] Rejection),

    /// The verb is not one of GET, POST, PUT or DELETE.
    #[error("request method {method:?} is not implemented")]
    Unimplemented { method: String },

    /// The payload could not be encoded into a request body.
    #[error("failed to encode request payload")]
    Encode(#[source] CodecError),

    /// The transport did not produce a response at all.
    #[error("{kind} request to {url} failed")]
    Transport {
        kind: RequestKind,
        url: String,
        #[source]
        source: BoxError,
    },
}

/// Why the validator refused a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The provided url is empty or whitespace.")]
    InvalidUrl,

    #[error("Payload cannot be absent for HTTP requests of type {kind}.")]
    PayloadRequired { kind: RequestKind },

    #[error("Expected a boolean result shape for {kind}, but found {found}.")]
    TypeMismatch {
        kind: RequestKind,
        found: &'static str,
    },
}

/// A codec failed to encode or decode a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CodecError {
    message: String,
}

impl CodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_converts_into_invalid_argument() {
        let err: DispatchError = Rejection::InvalidUrl.into();
        assert!(matches!(err, DispatchError::InvalidArgument(Rejection::InvalidUrl)));
        assert_eq!(
            err.to_string(),
            "invalid argument: The provided url is empty or whitespace."
        );
    }

    #[test]
    fn type_mismatch_names_verb_and_type() {
        let rejection = Rejection::TypeMismatch {
            kind: RequestKind::Delete,
            found: std::any::type_name::<String>(),
        };
        let text = rejection.to_string();
        assert!(text.contains("DELETE"));
        assert!(text.contains("String"));
    }

    #[test]
    fn transport_error_keeps_source() {
        let err = DispatchError::Transport {
            kind: RequestKind::Get,
            url: "http://localhost:1".to_string(),
            source: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "GET request to http://localhost:1 failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }
}
