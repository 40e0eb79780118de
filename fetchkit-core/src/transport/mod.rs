mod mock;

pub use mock::MockTransport;

use http::HeaderMap;
use thiserror::Error;

use crate::request::RequestDescriptor;

/// Raw result of executing a request: body bytes plus status metadata.
///
/// `status` is `None` when the reply did not arrive over HTTP (no status
/// line available); validation turns that into a structured error.
#[derive(Debug, Clone, Default)]
pub struct ResponseOutcome {
    pub status: Option<u16>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseOutcome {
    pub fn http(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self { status: Some(status), headers, body }
    }

    pub fn non_http(body: Vec<u8>) -> Self {
        Self { status: None, headers: HeaderMap::new(), body }
    }
}

/// Failure raised by a transport before any HTTP status was obtained.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Minimal async transport trait that can be implemented with any HTTP
/// library.
///
/// The core never talks to the network itself; a transport is injected
/// into the fetcher as a constructor argument, which keeps test doubles
/// free of shared global state. Implementations own cancellation and
/// connection handling; the core only passes the per-request timeout
/// down and tolerates a transport that never resolves.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Transport: Send + Sync {
    /// Execute one fully built request and return its raw outcome.
    ///
    /// Out-of-range HTTP statuses are data, not errors: they come back
    /// as an outcome and the validator decides. `TransportError` is for
    /// failures that produced no status at all.
    async fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<ResponseOutcome, TransportError>;
}
