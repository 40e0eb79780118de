use std::io::Read;

use fetchkit_core::{CachePolicy, RequestDescriptor, ResponseOutcome, Transport, TransportError};
use http::{HeaderName, HeaderValue};

/// Blocking transport built on ureq, wrapped in the async trait.
///
/// Each call blocks the current thread for the duration of the request.
/// Prefer `ReqwestTransport` when real concurrency is needed.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a transport with a default agent.
    pub fn new() -> Self {
        Self { agent: ureq::AgentBuilder::new().build() }
    }

    /// Wrap a pre-configured agent (proxy, TLS, connection reuse).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Transport for UreqTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<ResponseOutcome, TransportError> {
        let mut call = self
            .agent
            .request_url(request.method.as_str(), &request.url)
            .timeout(request.timeout);
        for (name, value) in request.headers.iter() {
            let value = value
                .to_str()
                .map_err(|_| TransportError(format!("non-text header value for {name}")))?;
            call = call.set(name.as_str(), value);
        }
        if matches!(request.cache_policy, CachePolicy::ReloadIgnoringCacheData) {
            call = call.set("Cache-Control", "no-cache");
        }

        log::debug!("executing {} {}", request.method, request.url);
        let sent = match &request.body {
            Some(body) => call.send_bytes(body),
            None => call.call(),
        };
        let response = match sent {
            Ok(response) => response,
            // Out-of-range statuses are data, not transport failures;
            // the core validator decides what to do with them.
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(TransportError(format!("ureq: {e}"))),
        };
        outcome(response)
    }
}

fn outcome(response: ureq::Response) -> std::result::Result<ResponseOutcome, TransportError> {
    let status = response.status();
    let mut headers = http::HeaderMap::new();
    for name in response.headers_names() {
        if let Some(value) = response.header(&name) {
            // skip malformed header lines rather than failing the call
            let (Ok(header_name), Ok(header_value)) =
                (name.parse::<HeaderName>(), HeaderValue::from_str(value))
            else {
                continue;
            };
            headers.append(header_name, header_value);
        }
    }
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| TransportError(format!("failed to read response body: {e}")))?;
    Ok(ResponseOutcome::http(status, headers, body))
}
