use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::codec::{DecodePolicy, EncodePolicy};

/// Timeout applied when a contract does not declare its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Body encoding used when the contract does not declare one.
    ///
    /// Exhaustive on purpose: every method must resolve to a default.
    pub fn default_encoding(&self) -> ParameterEncoding {
        match self {
            Method::Get | Method::Post | Method::Put | Method::Patch => ParameterEncoding::Json,
            Method::Head | Method::Delete => ParameterEncoding::FormUrl,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Head => http::Method::HEAD,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
            Method::Patch => http::Method::PATCH,
        }
    }
}

/// Caller-supplied byte transform for custom body encodings.
pub type BodyTransform = Arc<
    dyn Fn(Vec<u8>) -> std::result::Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync,
>;

/// How a body payload is rendered onto the wire.
#[derive(Clone)]
pub enum ParameterEncoding {
    FormUrl,
    Json,
    Xml,
    Custom {
        content_type: String,
        transform: BodyTransform,
    },
}

impl ParameterEncoding {
    pub fn content_type(&self) -> &str {
        match self {
            ParameterEncoding::FormUrl => "application/x-www-form-urlencoded",
            ParameterEncoding::Json => "application/json",
            ParameterEncoding::Xml => "application/xml",
            ParameterEncoding::Custom { content_type, .. } => content_type,
        }
    }
}

impl fmt::Debug for ParameterEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterEncoding::FormUrl => f.write_str("FormUrl"),
            ParameterEncoding::Json => f.write_str("Json"),
            ParameterEncoding::Xml => f.write_str("Xml"),
            ParameterEncoding::Custom { content_type, .. } => f
                .debug_struct("Custom")
                .field("content_type", content_type)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    None,
    Basic(String),
    Bearer(String),
}

impl Authorization {
    pub(crate) fn header_value(&self) -> Option<String> {
        match self {
            Authorization::Basic(key) => Some(format!("Basic {key}")),
            Authorization::Bearer(token) => Some(format!("Bearer {token}")),
            Authorization::None => None,
        }
    }
}

/// How the request interacts with any HTTP cache the transport sits on.
///
/// Carried on the descriptor verbatim; transports translate it as far as
/// their HTTP stack allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    UseProtocolCachePolicy,
    #[default]
    ReloadIgnoringCacheData,
    ReturnCacheDataElseLoad,
    ReturnCacheDataDontLoad,
}

/// Status codes accepted by a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidStatusCodes {
    Range(RangeInclusive<u16>),
    List(Vec<u16>),
}

impl ValidStatusCodes {
    pub fn contains(&self, code: u16) -> bool {
        match self {
            ValidStatusCodes::Range(range) => range.contains(&code),
            ValidStatusCodes::List(codes) => codes.contains(&code),
        }
    }
}

impl Default for ValidStatusCodes {
    fn default() -> Self {
        ValidStatusCodes::Range(200..=299)
    }
}

/// Placeholder payload for endpoints that do not use a parameter kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoParameters {}

/// Immutable description of one endpoint family: where requests go and
/// which policies apply to every call.
///
/// Contracts are configuration, not runtime state — define one per
/// logical API and reuse it across calls.
#[derive(Debug, Clone)]
pub struct Contract {
    pub method: Method,
    pub host: String,
    pub encoding: ParameterEncoding,
    pub cache_policy: CachePolicy,
    pub timeout: Duration,
    pub valid_status_codes: ValidStatusCodes,
    pub authorization: Authorization,
    pub debug: bool,
    pub encode_policy: EncodePolicy,
    pub decode_policy: DecodePolicy,
}

impl Contract {
    pub fn new(host: impl Into<String>, method: Method) -> Self {
        Self {
            method,
            host: host.into(),
            encoding: method.default_encoding(),
            cache_policy: CachePolicy::default(),
            timeout: DEFAULT_TIMEOUT,
            valid_status_codes: ValidStatusCodes::default(),
            authorization: Authorization::None,
            debug: cfg!(debug_assertions),
            encode_policy: EncodePolicy::default(),
            decode_policy: DecodePolicy::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_valid_status_codes(mut self, valid_status_codes: ValidStatusCodes) -> Self {
        self.valid_status_codes = valid_status_codes;
        self
    }

    pub fn with_authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_encode_policy(mut self, encode_policy: EncodePolicy) -> Self {
        self.encode_policy = encode_policy;
        self
    }

    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_resolves_a_default_encoding() {
        let methods = [
            Method::Get,
            Method::Head,
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Patch,
        ];
        for method in methods {
            // content_type() forces the resolved encoding to be concrete
            assert!(!method.default_encoding().content_type().is_empty());
        }
    }

    #[test]
    fn default_encoding_table() {
        assert!(matches!(Method::Get.default_encoding(), ParameterEncoding::Json));
        assert!(matches!(Method::Put.default_encoding(), ParameterEncoding::Json));
        assert!(matches!(Method::Post.default_encoding(), ParameterEncoding::Json));
        assert!(matches!(Method::Patch.default_encoding(), ParameterEncoding::Json));
        assert!(matches!(Method::Head.default_encoding(), ParameterEncoding::FormUrl));
        assert!(matches!(Method::Delete.default_encoding(), ParameterEncoding::FormUrl));
    }

    #[test]
    fn status_code_sets() {
        let range = ValidStatusCodes::default();
        assert!(range.contains(200));
        assert!(range.contains(299));
        assert!(!range.contains(300));
        assert!(!range.contains(199));

        let list = ValidStatusCodes::List(vec![200, 404]);
        assert!(list.contains(404));
        assert!(!list.contains(201));
    }

    #[test]
    fn authorization_header_values() {
        assert_eq!(
            Authorization::Basic("abc123".into()).header_value().as_deref(),
            Some("Basic abc123")
        );
        assert_eq!(
            Authorization::Bearer("tok".into()).header_value().as_deref(),
            Some("Bearer tok")
        );
        assert_eq!(Authorization::None.header_value(), None);
    }
}
