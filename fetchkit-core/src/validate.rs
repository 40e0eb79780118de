use http::HeaderMap;

use crate::contract::ValidStatusCodes;
use crate::error::{Error, Result};
use crate::transport::ResponseOutcome;

/// Body bytes and status metadata of a response that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Check the outcome's status against the contract's accepted set.
///
/// The body is never inspected here; an out-of-range status carries the
/// raw bytes and headers into the error so callers can log or fall back.
pub fn validate(outcome: ResponseOutcome, valid: &ValidStatusCodes) -> Result<ValidatedResponse> {
    let Some(status) = outcome.status else {
        return Err(Error::NonHttpResponse);
    };
    if !valid.contains(status) {
        return Err(Error::StatusCode {
            code: status,
            data: outcome.body,
            headers: outcome.headers,
        });
    }
    Ok(ValidatedResponse {
        status,
        headers: outcome.headers,
        body: outcome.body,
    })
}
