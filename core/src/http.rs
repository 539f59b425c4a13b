//! HTTP vocabulary shared by the dispatcher and its transports.
//!
//! # Design
//! These types describe requests and responses as plain data. The dispatcher
//! hands an encoded `HttpBody` to the transport and receives an
//! `HttpResponse` back; it never sees the HTTP library the transport uses.
//! All fields use owned types so a transport can build them from any client.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// The verbs the dispatcher knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Get => "GET",
            RequestKind::Post => "POST",
            RequestKind::Put => "PUT",
            RequestKind::Delete => "DELETE",
        }
    }

    /// Whether a request of this kind carries an encoded payload.
    pub fn requires_payload(self) -> bool {
        matches!(self, RequestKind::Post | RequestKind::Put)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a verb, ignoring ASCII case. Anything outside the four supported
/// verbs is reported as `DispatchError::Unimplemented`.
impl FromStr for RequestKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = [
            RequestKind::Get,
            RequestKind::Post,
            RequestKind::Put,
            RequestKind::Delete,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()));

        kind.ok_or_else(|| DispatchError::Unimplemented {
            method: s.to_string(),
        })
    }
}

/// An encoded request body together with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBody {
    pub content_type: String,
    pub content: String,
}

/// What a transport reports back for a completed HTTP exchange.
///
/// Error statuses are still responses; a transport only fails when no status
/// was obtained at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("GET", RequestKind::Get)]
    #[case("post", RequestKind::Post)]
    #[case("Put", RequestKind::Put)]
    #[case(" DELETE ", RequestKind::Delete)]
    fn parses_supported_verbs(#[case] verb: &str, #[case] expected: RequestKind) {
        assert_eq!(verb.parse::<RequestKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("PATCH")]
    #[case("HEAD")]
    #[case("")]
    fn unknown_verb_is_unimplemented(#[case] verb: &str) {
        let err = verb.parse::<RequestKind>().unwrap_err();
        assert!(matches!(err, DispatchError::Unimplemented { method } if method == verb));
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(RequestKind::Delete.to_string(), "DELETE");
        assert_eq!(RequestKind::Get.to_string(), "GET");
    }

    #[test]
    fn only_post_and_put_require_payload() {
        assert!(RequestKind::Post.requires_payload());
        assert!(RequestKind::Put.requires_payload());
        assert!(!RequestKind::Get.requires_payload());
        assert!(!RequestKind::Delete.requires_payload());
    }

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(300, false)]
    #[case(404, false)]
    #[case(500, false)]
    fn success_is_any_2xx(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(HttpResponse::new(status, "").is_success(), expected);
    }
}
