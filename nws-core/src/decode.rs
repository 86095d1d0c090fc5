use serde::de::DeserializeOwned;

use crate::{NwsError, Result};

/// Decodes a JSON body into `T`.
///
/// Timestamps in the models are `chrono` RFC 3339 values, so ISO-8601
/// strings with or without fractional seconds are accepted. There is no
/// partial decoding: a missing required field fails the whole value.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(NwsError::Decoding)
}
