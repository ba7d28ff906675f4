//! JSON text form of [`Error`].
//!
//! The wire object has exactly four keys: `id` (string), `code` (number),
//! `detail` (string) and `status` (string). Decoding is lenient in the same
//! ways as the peers that produce it: missing keys and `null` values decode
//! to the zero value, unknown keys are ignored, keys match case-insensitively
//! (an exact-case key wins) and a repeated key keeps its last value.

use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Error;

/// Why a text could not be decoded as an error payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("error payload is empty")]
    Empty,

    #[error("error payload is not a JSON error object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error payload is JSON but not an object")]
    NotAnObject,
}

fn field<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

fn decode_field<T: DeserializeOwned + Default>(
    map: &Map<String, Value>,
    name: &str,
) -> Result<T, serde_json::Error> {
    match field(map, name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value),
    }
}

impl Error {
    /// Encodes the error as JSON. Never fails; an encoding failure yields `""`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Strict decode of the JSON text form.
    pub fn try_parse(text: &str) -> Result<Self, DecodeError> {
        if text.trim().is_empty() {
            return Err(DecodeError::Empty);
        }
        let Value::Object(map) = serde_json::from_str::<Value>(text)? else {
            return Err(DecodeError::NotAnObject);
        };
        Ok(Self {
            id: decode_field(&map, "id")?,
            code: decode_field(&map, "code")?,
            detail: decode_field(&map, "detail")?,
            status: decode_field(&map, "status")?,
        })
    }

    /// Decodes an error received from another process.
    ///
    /// Text that is not a JSON error object is kept verbatim as the detail of
    /// an otherwise zero-valued error: empty identity and status, code 0.
    pub fn parse(text: &str) -> Self {
        match Self::try_parse(text) {
            Ok(err) => err,
            Err(e) => {
                tracing::debug!(error = %e, "keeping undecodable error text as detail");
                Self {
                    detail: text.to_owned(),
                    ..Self::default()
                }
            }
        }
    }
}

impl FromStr for Error {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}
