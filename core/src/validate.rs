//! Request validation, run before anything touches the network.

use crate::error::Rejection;
use crate::http::RequestKind;
use crate::response::ResultShape;

pub(crate) fn validate_url(url: &str) -> Result<(), Rejection> {
    if url.trim().is_empty() {
        return Err(Rejection::InvalidUrl);
    }
    Ok(())
}

/// Checks a request against the dispatch rules. The first failing rule wins:
/// blank url, then missing POST/PUT payload, then a DELETE that does not ask
/// for the `Flag` shape.
pub fn validate<S: ResultShape>(
    url: &str,
    kind: RequestKind,
    has_payload: bool,
) -> Result<(), Rejection> {
    validate_url(url)?;

    if kind.requires_payload() && !has_payload {
        return Err(Rejection::PayloadRequired { kind });
    }

    if kind == RequestKind::Delete && !S::IS_FLAG {
        return Err(Rejection::TypeMismatch {
            kind,
            found: S::type_name(),
        });
    }

    Ok(())
}
