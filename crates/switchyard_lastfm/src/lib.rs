//! Last.fm API client with request signing.
//!
//! Read calls go out as `GET` with the parameters in the query string. Write
//! calls need a session key and the shared secret: the parameters are signed
//! (see [`sign`]) and sent as a form-encoded `POST`.
//!
//! # Usage
//!
//! ```no_run
//! use switchyard_core::Params;
//! use switchyard_lastfm::{CallKind, Credentials, LastfmClient};
//!
//! # async fn run() -> switchyard_error::SwitchyardResult<()> {
//! let credentials = Credentials::new("api-key", Some("secret".into()), None)?;
//! let client = LastfmClient::new(credentials)?;
//!
//! let info = client
//!     .call("artist.getinfo", Params::new().with("artist", "Cher"), CallKind::Read)
//!     .await?;
//! println!("{}", info["artist"]["name"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod client;
mod credentials;
mod request;
mod signature;

pub use catalog::{METHODS, MethodSpec, ParamSpec, ParamType, find_method};
pub use client::{DEFAULT_BASE_URL, LastfmClient, LastfmClientBuilder};
pub use credentials::Credentials;
pub use request::{CallKind, WireRequest, prepare};
pub use signature::{RESERVED_KEYS, sign};
