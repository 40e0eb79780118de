use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contract::Contract;
use crate::debug;
use crate::decode;
use crate::error::{Error, Result};
use crate::path::PathComponents;
use crate::request::build_request;
use crate::transport::Transport;
use crate::validate;

/// Executes endpoint contracts over an injected transport.
///
/// The transport is the only capability a fetcher owns; everything else
/// is derived per call from the contract and the payloads. Calls are
/// independent units of work — nothing is shared between concurrent
/// invocations, no retries happen internally, and the single suspension
/// point is the transport call.
#[derive(Debug, Clone)]
pub struct Fetcher<T: Transport> {
    transport: T,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one request cycle and return the validated raw body bytes.
    ///
    /// Callers that consume non-JSON payloads (images, exports) stop
    /// here; [`Fetcher::fetch`] layers typed decoding on top.
    pub async fn request<Q, B, H>(
        &self,
        contract: &Contract,
        path: &(impl PathComponents + ?Sized + Sync),
        query: Option<&Q>,
        body: Option<&B>,
        headers: Option<&H>,
    ) -> Result<Vec<u8>>
    where
        Q: Serialize + Sync,
        B: Serialize + Sync,
        H: Serialize + Sync,
    {
        let request = build_request(contract, path, query, body, headers)?;
        let outcome = match self.transport.execute(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let error = Error::Transport(e.to_string());
                debug::log_exchange(contract, &request, Err(&error));
                return Err(error);
            }
        };
        debug::log_exchange(contract, &request, Ok(&outcome));
        // Validation strictly precedes decoding: an out-of-range body is
        // reported as a status failure, never handed to the decoder.
        let validated = validate::validate(outcome, &contract.valid_status_codes)?;
        Ok(validated.body)
    }

    /// Run one request cycle and decode the body with the contract's
    /// decode policy.
    pub async fn fetch<R, Q, B, H>(
        &self,
        contract: &Contract,
        path: &(impl PathComponents + ?Sized + Sync),
        query: Option<&Q>,
        body: Option<&B>,
        headers: Option<&H>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
        Q: Serialize + Sync,
        B: Serialize + Sync,
        H: Serialize + Sync,
    {
        let bytes = self.request(contract, path, query, body, headers).await?;
        decode::decode(&bytes, &contract.decode_policy)
    }
}
