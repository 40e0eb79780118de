use std::time::Duration;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::codec::{self, EncodedBody};
use crate::contract::{CachePolicy, Contract, Method};
use crate::error::{Error, Result};
use crate::path::PathComponents;

/// A fully resolved request, ready for a transport to execute.
///
/// Built once per call and immutable afterwards; nothing here is shared
/// between concurrent calls.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
    pub timeout: Duration,
}

/// Compose host, path, encoded parameters, headers and authorization
/// into a transport-ready descriptor.
pub fn build_request<Q, B, H>(
    contract: &Contract,
    path: &(impl PathComponents + ?Sized),
    query: Option<&Q>,
    body: Option<&B>,
    header_payload: Option<&H>,
) -> Result<RequestDescriptor>
where
    Q: Serialize,
    B: Serialize,
    H: Serialize,
{
    let mut url = Url::parse(&contract.host)
        .map_err(|e| Error::InvalidUrl(format!("{}: {e}", contract.host)))?;

    // Query items are attached before the path is extended so that a
    // change of URL primitive can never reset them on path mutation.
    if let Some(payload) = query {
        let items = codec::query_items(payload, &contract.encode_policy)?;
        if !items.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(items.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
    }

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot carry a path", contract.host)))?;
        segments.pop_if_empty();
        for segment in path.path_components() {
            // pushed one at a time so each segment is escaped individually
            segments.push(&segment);
        }
    }

    let mut body_bytes = None;
    if let Some(payload) = body {
        match codec::encode_body(payload, &contract.encoding, &contract.encode_policy)? {
            EncodedBody::Bytes(bytes) => body_bytes = Some(bytes),
            EncodedBody::QueryItems(items) => {
                // Form items travel percent-encoded in the body, never on the URL.
                let mut form = url::form_urlencoded::Serializer::new(String::new());
                form.extend_pairs(items.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                body_bytes = Some(form.finish().into_bytes());
            }
        }
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, header_value(contract.encoding.content_type())?);
    if let Some(payload) = header_payload {
        for (key, value) in codec::header_items(payload, &contract.encode_policy)? {
            let name: HeaderName = key
                .parse()
                .map_err(|_| Error::Encoding(format!("invalid header name `{key}`")))?;
            headers.insert(name, header_value(&value)?);
        }
    }
    if let Some(value) = contract.authorization.header_value() {
        headers.insert(AUTHORIZATION, header_value(&value)?);
    }

    Ok(RequestDescriptor {
        url,
        method: contract.method,
        headers,
        body: body_bytes,
        cache_policy: contract.cache_policy,
        timeout: contract.timeout,
    })
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| Error::Encoding(format!("invalid header value `{value}`")))
}
