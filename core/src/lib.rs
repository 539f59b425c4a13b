//! Generic HTTP request dispatcher.
//!
//! # Overview
//! `Dispatcher::send_request` takes a url, a `RequestKind` and an optional
//! payload, makes the matching HTTP call and returns a classified
//! `Response`: `Success`, `Failure`, `Empty` or `Undeserializable`.
//!
//! # Design
//! - The HTTP client and the payload codec sit behind the `Transport` and
//!   `Codec` traits, so tests swap in in-memory fakes.
//! - Callers pick the result shape at compile time: `Decoded<T>` for a value
//!   decoded from a GET body, `Flag` for a plain success flag. DELETE only
//!   accepts `Flag`.
//! - Caller mistakes are `DispatchError`s raised before any I/O; everything
//!   the server answers is a `Response`.

pub mod classify;
pub mod codec;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;
pub mod validate;

pub use codec::{Codec, JsonCodec};
pub use dispatcher::{Dispatcher, NO_PAYLOAD};
pub use error::{BoxError, CodecError, DispatchError, Rejection};
pub use http::{HttpBody, HttpResponse, RequestKind};
pub use response::{Decoded, Flag, Response, ResponseKind, ResultShape};
pub use transport::{Transport, UreqTransport};
