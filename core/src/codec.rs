//! Payload encoding and response decoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Turns payloads into request bodies and GET bodies back into values.
pub trait Codec {
    /// Content type sent alongside encoded bodies.
    fn content_type(&self) -> &str;

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError>;

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;
}

/// UTF-8 JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn content_type(&self) -> &str {
        "application/json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        Ok(serde_json::from_str(text)?)
    }
}
