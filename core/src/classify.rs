//! Maps a raw transport response onto a classified `Response`.

use crate::codec::Codec;
use crate::http::{HttpResponse, RequestKind};
use crate::response::{Response, ResponseKind, ResultShape};

/// Classifies `raw` for a request of `kind` sent to `url`.
///
/// Non-2xx statuses are `Failure`. Only GET bodies are read: a blank body is
/// `Empty` and a body the codec rejects is `Undeserializable`. A successful
/// POST, PUT or DELETE is `Success` with `S::completed()` as its data.
pub fn classify<S, C>(
    codec: &C,
    raw: &HttpResponse,
    kind: RequestKind,
    url: &str,
) -> Response<S::Output>
where
    S: ResultShape,
    C: Codec,
{
    let status = raw.status;

    if !raw.is_success() {
        let mut message = format!("Status code: {status}. Request of type {kind} failed for url: {url}.");
        if let Some(reason) = raw.reason.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            message.push(' ');
            message.push_str(reason.trim_end_matches('.'));
            message.push('.');
        }
        return Response::unsuccessful(ResponseKind::Failure, message, S::failed());
    }

    if kind != RequestKind::Get {
        return Response::success(S::completed());
    }

    if raw.body.trim().is_empty() {
        return Response::unsuccessful(
            ResponseKind::Empty,
            format!("Status code: {status}. API call returned an empty response for url: {url}."),
            None,
        );
    }

    match S::decode(codec, &raw.body) {
        Ok(data) => Response::success(Some(data)),
        Err(err) => Response::unsuccessful(
            ResponseKind::Undeserializable,
            format!(
                "Status code: {status}. Failed to deserialize the API response to type {} for url: {url}. {err}.",
                S::type_name()
            ),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;
    use crate::codec::JsonCodec;
    use crate::response::{Decoded, Flag};

    const URL: &str = "http://localhost:3000/records";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Subject {
        a: i64,
        b: Option<String>,
        c: bool,
    }

    #[test]
    fn get_decodes_body() {
        let raw = HttpResponse::new(200, r#"{"a": 0, "b": null,"c": false}"#);
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, RequestKind::Get, URL);
        assert_eq!(response.kind(), ResponseKind::Success);
        assert_eq!(
            response.into_data(),
            Some(Subject {
                a: 0,
                b: None,
                c: false
            })
        );
    }

    #[test]
    fn failure_message_includes_reason() {
        let raw = HttpResponse::new(404, "").with_reason("Url not found.");
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, RequestKind::Get, URL);
        assert_eq!(response.kind(), ResponseKind::Failure);
        assert_eq!(
            response.message(),
            "Status code: 404. Request of type GET failed for url: http://localhost:3000/records. Url not found."
        );
        assert!(response.data().is_none());
    }

    #[test]
    fn failure_message_without_reason() {
        let raw = HttpResponse::new(500, "boom").with_reason("  ");
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, RequestKind::Put, URL);
        assert_eq!(
            response.message(),
            "Status code: 500. Request of type PUT failed for url: http://localhost:3000/records."
        );
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\r\n\t")]
    fn blank_get_body_is_empty(#[case] body: &str) {
        let raw = HttpResponse::new(200, body);
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, RequestKind::Get, URL);
        assert_eq!(response.kind(), ResponseKind::Empty);
        assert!(response.message().contains("200"));
        assert!(response.message().contains(URL));
        assert!(response.data().is_none());
    }

    #[test]
    fn undecodable_get_body() {
        let raw = HttpResponse::new(200, "Undeserializable content.");
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, RequestKind::Get, URL);
        assert_eq!(response.kind(), ResponseKind::Undeserializable);
        assert!(response.message().contains("Subject"));
        assert!(response.message().contains(URL));
        assert!(response.data().is_none());
    }

    #[rstest]
    #[case(RequestKind::Post)]
    #[case(RequestKind::Put)]
    fn body_verbs_succeed_without_decoding(#[case] kind: RequestKind) {
        let raw = HttpResponse::new(201, "not even json");
        let response = classify::<Decoded<Subject>, _>(&JsonCodec, &raw, kind, URL);
        assert_eq!(response.kind(), ResponseKind::Success);
        assert!(response.data().is_none());
    }

    #[rstest]
    #[case(200, ResponseKind::Success, true)]
    #[case(204, ResponseKind::Success, true)]
    #[case(404, ResponseKind::Failure, false)]
    #[case(503, ResponseKind::Failure, false)]
    fn delete_reports_flag(#[case] status: u16, #[case] kind: ResponseKind, #[case] flag: bool) {
        let raw = HttpResponse::new(status, "");
        let response = classify::<Flag, _>(&JsonCodec, &raw, RequestKind::Delete, URL);
        assert_eq!(response.kind(), kind);
        assert_eq!(response.data(), Some(&flag));
    }

    #[test]
    fn flag_failure_on_get_is_false() {
        let raw = HttpResponse::new(400, "");
        let response = classify::<Flag, _>(&JsonCodec, &raw, RequestKind::Get, URL);
        assert_eq!(response.into_data(), Some(false));
    }
}
