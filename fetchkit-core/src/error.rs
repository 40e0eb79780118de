use std::fmt;

use http::HeaderMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("encoding: {0}")]
    Encoding(String),
    #[error("decoding: {detail}")]
    Decoding { detail: DecodeDetail, data: Vec<u8> },
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status code {code}")]
    StatusCode {
        code: u16,
        data: Vec<u8>,
        headers: HeaderMap,
    },
    #[error("non-HTTP response")]
    NonHttpResponse,
    #[error("{key}: {detail}")]
    Logic { key: String, detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// What went wrong while mapping response bytes onto the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeCategory {
    TypeMismatch,
    MissingKey,
    CorruptedData,
    ValueNotFound,
}

impl DecodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeCategory::TypeMismatch => "type mismatch",
            DecodeCategory::MissingKey => "missing key",
            DecodeCategory::CorruptedData => "corrupted data",
            DecodeCategory::ValueNotFound => "value not found",
        }
    }
}

impl fmt::Display for DecodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic for one decode failure: the category, the path of the
/// offending field inside the document, and an excerpt of the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeDetail {
    pub category: DecodeCategory,
    pub path: String,
    pub cause: String,
}

impl fmt::Display for DecodeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.category, self.cause)
        } else {
            write!(f, "{} at `{}`: {}", self.category, self.path, self.cause)
        }
    }
}
