//! Classified responses and the result shapes callers choose from.
//!
//! # Design
//! A caller states up front whether it wants a decoded value (`Decoded<T>`)
//! or a plain success flag (`Flag`). The choice is a type parameter, so the
//! dispatcher knows at compile time whether a DELETE is allowed and what to
//! store as `data` when no body is decoded.

use std::any::type_name;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::codec::Codec;
use crate::error::CodecError;

/// How a dispatched request turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    /// The server answered with a non-2xx status.
    Failure,
    /// A GET succeeded but the body was blank.
    Empty,
    /// A GET succeeded but the body did not decode into the requested type.
    Undeserializable,
}

/// The outcome of one dispatched request.
///
/// `message` is filled for every non-success kind. `data` is present on
/// success, and on failure only for the `Flag` shape, where it is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    kind: ResponseKind,
    message: String,
    data: Option<T>,
}

impl<T> Response<T> {
    pub(crate) fn success(data: Option<T>) -> Self {
        Self {
            kind: ResponseKind::Success,
            message: String::new(),
            data,
        }
    }

    pub(crate) fn unsuccessful(kind: ResponseKind, message: String, data: Option<T>) -> Self {
        Self {
            kind,
            message,
            data,
        }
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn is_success(&self) -> bool {
        self.kind == ResponseKind::Success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// The result shape of a request: what a GET decodes into and what `data`
/// holds when nothing is decoded.
pub trait ResultShape {
    type Output;

    /// Whether this is the boolean success-flag shape required by DELETE.
    const IS_FLAG: bool;

    /// `data` for a non-2xx response.
    fn failed() -> Option<Self::Output>;

    /// `data` for a successful POST, PUT or DELETE.
    fn completed() -> Option<Self::Output>;

    fn decode<C: Codec>(codec: &C, text: &str) -> Result<Self::Output, CodecError>;

    fn type_name() -> &'static str {
        type_name::<Self::Output>()
    }
}

/// Boolean success flag: `true` once the verb's side effect succeeded,
/// `false` when the server refused it.
#[derive(Debug, Clone, Copy)]
pub enum Flag {}

impl ResultShape for Flag {
    type Output = bool;

    const IS_FLAG: bool = true;

    fn failed() -> Option<bool> {
        Some(false)
    }

    fn completed() -> Option<bool> {
        Some(true)
    }

    fn decode<C: Codec>(codec: &C, text: &str) -> Result<bool, CodecError> {
        codec.decode(text)
    }
}

/// A value of type `T` decoded from a GET body.
#[derive(Debug, Clone, Copy)]
pub struct Decoded<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> ResultShape for Decoded<T> {
    type Output = T;

    const IS_FLAG: bool = false;

    fn failed() -> Option<T> {
        None
    }

    fn completed() -> Option<T> {
        None
    }

    fn decode<C: Codec>(codec: &C, text: &str) -> Result<T, CodecError> {
        codec.decode(text)
    }
}
