use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::{self, DecodePolicy, KeyDecodingStrategy};
use crate::error::{DecodeCategory, DecodeDetail, Error, Result};

/// Decode response bytes into a typed value under the given policy.
///
/// Failures never escape as raw serde errors: each one is classified
/// into a [`DecodeDetail`] and wrapped together with the untouched
/// payload bytes so callers can log the literal document. Pure —
/// re-decoding identical bytes yields an identical detail.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], policy: &DecodePolicy) -> Result<T> {
    let mut value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            return Err(failure(
                DecodeDetail {
                    category: DecodeCategory::CorruptedData,
                    path: String::new(),
                    cause: e.to_string(),
                },
                bytes,
            ))
        }
    };
    if policy.keys == KeyDecodingStrategy::ConvertFromSnakeCase {
        codec::transform_keys(&mut value, &codec::from_snake_case);
    }
    match serde_path_to_error::deserialize(value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            let path = e.path().to_string();
            let inner = e.into_inner();
            Err(failure(
                DecodeDetail {
                    category: categorize(&inner),
                    path: if path == "." { String::new() } else { path },
                    cause: inner.to_string(),
                },
                bytes,
            ))
        }
    }
}

fn failure(detail: DecodeDetail, bytes: &[u8]) -> Error {
    log::error!("[decode error] {detail}");
    Error::Decoding { detail, data: bytes.to_vec() }
}

fn categorize(error: &serde_json::Error) -> DecodeCategory {
    let message = error.to_string();
    if message.starts_with("missing field") {
        DecodeCategory::MissingKey
    } else if message.starts_with("invalid type: null") {
        DecodeCategory::ValueNotFound
    } else if message.starts_with("invalid type")
        || message.starts_with("invalid value")
        || message.starts_with("invalid length")
        || message.starts_with("unknown variant")
        || message.starts_with("unknown field")
        || message.starts_with("duplicate field")
    {
        DecodeCategory::TypeMismatch
    } else {
        DecodeCategory::CorruptedData
    }
}
