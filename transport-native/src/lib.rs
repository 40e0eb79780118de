#[cfg(feature = "reqwest-client")]
mod reqwest_impl;
#[cfg(feature = "ureq-client")]
mod ureq_impl;

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::ReqwestTransport;
#[cfg(feature = "ureq-client")]
pub use ureq_impl::UreqTransport;
