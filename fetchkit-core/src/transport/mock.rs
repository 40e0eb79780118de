use std::collections::HashMap;
use std::sync::Mutex;

use super::{ResponseOutcome, Transport, TransportError};
use crate::request::RequestDescriptor;

/// Deterministic transport double: maps absolute URLs to canned replies.
///
/// Every executed descriptor is recorded so tests can assert on the
/// exact wire shape the builder produced, without any network access.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, CannedReply>,
    fallback: Option<CannedReply>,
    seen: Mutex<Vec<RequestDescriptor>>,
}

#[derive(Debug, Clone)]
enum CannedReply {
    Outcome(ResponseOutcome),
    Failure(String),
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `outcome` for requests whose absolute URL equals `url`.
    pub fn on(mut self, url: impl Into<String>, outcome: ResponseOutcome) -> Self {
        self.routes.insert(url.into(), CannedReply::Outcome(outcome));
        self
    }

    /// Fail with a transport error for requests to `url`.
    pub fn on_failure(mut self, url: impl Into<String>, detail: impl Into<String>) -> Self {
        self.routes.insert(url.into(), CannedReply::Failure(detail.into()));
        self
    }

    /// Serve `outcome` for any URL without an explicit route.
    pub fn fallback(mut self, outcome: ResponseOutcome) -> Self {
        self.fallback = Some(CannedReply::Outcome(outcome));
        self
    }

    /// Descriptors executed so far, in call order.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().expect("mock transport lock").clone()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<ResponseOutcome, TransportError> {
        self.seen
            .lock()
            .expect("mock transport lock")
            .push(request.clone());
        let reply = self
            .routes
            .get(request.url.as_str())
            .or(self.fallback.as_ref());
        match reply {
            Some(CannedReply::Outcome(outcome)) => Ok(outcome.clone()),
            Some(CannedReply::Failure(detail)) => Err(TransportError(detail.clone())),
            None => Err(TransportError(format!("no canned reply for {}", request.url))),
        }
    }
}
