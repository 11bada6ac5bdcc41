//! Last.fm `api_sig` computation.

use md5::{Digest, Md5};
use switchyard_core::WireParams;

/// Parameter names never included in a signature.
pub const RESERVED_KEYS: [&str; 3] = ["format", "callback", "api_sig"];

/// Computes the `api_sig` for a set of wire parameters.
///
/// Concatenates `name` and `value` for every non-reserved parameter in
/// ascending name order, appends the shared secret, and returns the MD5 digest
/// as lowercase hex.
pub fn sign(params: &WireParams, secret: &str) -> String {
    let mut hasher = Md5::new();
    for (name, value) in params
        .iter()
        .filter(|(name, _)| !RESERVED_KEYS.contains(name))
    {
        hasher.update(name.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
