mod codec;
mod contract;
mod debug;
mod decode;
mod error;
mod fetch;
mod path;
mod request;
mod transport;
mod validate;

pub use codec::*;
pub use contract::*;
pub use debug::{curl_line, yaml_error, yaml_request, yaml_response};
pub use decode::decode;
pub use error::*;
pub use fetch::Fetcher;
pub use path::PathComponents;
pub use request::{build_request, RequestDescriptor};
pub use transport::*;
pub use validate::{validate, ValidatedResponse};

// Re-export the vocabulary crates so consumers don't have to pin
// matching versions themselves.
pub use http;
pub use url;
