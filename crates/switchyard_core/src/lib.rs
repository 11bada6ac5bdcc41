//! Shared building blocks for the Switchyard API adapters.
//!
//! - [`Params`] / [`ParamValue`]: typed request parameters with one canonical
//!   wire string per value.
//! - [`build_http_client`] / [`read_json`] / [`read_text`]: the single HTTP client setup and
//!   response handling used by every adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod params;

pub use http::{REQUEST_TIMEOUT, build_http_client, read_json, read_text, transport_error};
pub use params::{ParamValue, Params, WireParams};
