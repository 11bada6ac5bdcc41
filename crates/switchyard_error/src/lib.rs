//! Error types for the Switchyard API adapters.
//!
//! Every error family records the source location where it was raised, so a
//! failure surfaced through an MCP tool call can be traced back to the exact
//! request builder or client that produced it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod http;
mod input;

pub use auth::AuthError;
pub use config::ConfigError;
pub use error::{SwitchyardError, SwitchyardErrorKind, SwitchyardResult};
pub use http::{HttpError, HttpErrorKind};
pub use input::InputError;
