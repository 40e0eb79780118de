use fetchkit_core::{CachePolicy, RequestDescriptor, ResponseOutcome, Transport, TransportError};
use http::header::CACHE_CONTROL;

/// Async transport built on reqwest.
///
/// Per-request timeouts come from the request descriptor, so no
/// client-level timeout is configured here.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default client configuration.
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }

    /// Wrap a pre-configured reqwest client (connection pooling, proxy,
    /// TLS settings).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<ResponseOutcome, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .headers(request.headers.clone())
            .timeout(request.timeout);
        if matches!(
            request.cache_policy,
            CachePolicy::ReloadIgnoringCacheData
        ) {
            builder = builder.header(CACHE_CONTROL, "no-cache");
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        log::debug!("executing {} {}", request.method, request.url);
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("reqwest: {e}")))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("failed to read response body: {e}")))?;

        Ok(ResponseOutcome::http(status, headers, body.to_vec()))
    }
}
