//! Wire parameter assembly for Last.fm calls.

use crate::{Credentials, sign};
use derive_getters::Getters;
use switchyard_core::{Params, WireParams};
use switchyard_error::{AuthError, SwitchyardResult};
use tracing::debug;

/// Whether a call reads public data or writes on behalf of a user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, serde::Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// Unsigned `GET`, parameters in the query string.
    Read,
    /// Signed `POST`, parameters form-encoded in the body. Needs a session key
    /// and the shared secret.
    Write,
}

/// A fully assembled request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WireRequest {
    /// How the request is sent.
    kind: CallKind,
    /// Exactly the parameters that go on the wire.
    params: WireParams,
}

/// Parameter names the builder always sets itself.
const INJECTED_KEYS: [&str; 4] = ["api_key", "format", "method", "api_sig"];

/// Assembles the wire parameters for a call.
///
/// Injects `api_key`, `format=json` and `method`, overriding any caller value
/// for those names. Write calls additionally get a session key (the caller's
/// `sk` if non-empty, otherwise the stored one) and an `api_sig` computed over
/// the result.
///
/// # Errors
///
/// Write calls fail with an authentication error when no session key is
/// available or no shared secret is configured. No network traffic happens
/// here.
pub fn prepare(
    credentials: &Credentials,
    method: &str,
    mut params: Params,
    kind: CallKind,
) -> SwitchyardResult<WireRequest> {
    for key in INJECTED_KEYS {
        if params.remove(key).is_some() {
            debug!(key, "Discarding caller-supplied reserved parameter");
        }
    }

    params.insert("api_key", credentials.api_key());
    params.insert("format", "json");
    params.insert("method", method);

    if kind == CallKind::Read {
        return Ok(WireRequest {
            kind,
            params: params.to_wire(),
        });
    }

    if !params.has_value("sk") {
        let session_key = credentials
            .session_key()
            .ok_or_else(|| AuthError::session_key_required())?;
        params.insert("sk", session_key);
    }

    let secret = credentials
        .api_secret()
        .ok_or_else(|| AuthError::secret_required())?;

    let mut wire = params.to_wire();
    let signature = sign(&wire, secret);
    wire.insert("api_sig", signature);

    Ok(WireRequest { kind, params: wire })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_credentials() -> Credentials {
        Credentials::new("key", Some("secret".into()), Some("stored-session".into())).unwrap()
    }

    #[test]
    fn test_read_injects_and_does_not_sign() {
        let creds = Credentials::new("key", None, None).unwrap();
        let request = prepare(
            &creds,
            "artist.getinfo",
            Params::new().with("artist", "Cher"),
            CallKind::Read,
        )
        .unwrap();

        assert_eq!(*request.kind(), CallKind::Read);
        let params = request.params();
        assert_eq!(params.get("api_key"), Some("key"));
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.get("method"), Some("artist.getinfo"));
        assert_eq!(params.get("artist"), Some("Cher"));
        assert!(!params.contains("api_sig"));
        assert!(!params.contains("sk"));
    }

    #[test]
    fn test_caller_cannot_override_injected_keys() {
        let creds = full_credentials();
        let params = Params::new()
            .with("api_key", "spoofed")
            .with("format", "xml")
            .with("method", "other.method")
            .with("api_sig", "forged");

        let request = prepare(&creds, "track.love", params, CallKind::Write).unwrap();
        let wire = request.params();
        assert_eq!(wire.get("api_key"), Some("key"));
        assert_eq!(wire.get("format"), Some("json"));
        assert_eq!(wire.get("method"), Some("track.love"));
        assert_ne!(wire.get("api_sig"), Some("forged"));
    }

    #[test]
    fn test_write_uses_stored_session_key() {
        let request = prepare(
            &full_credentials(),
            "track.love",
            Params::new().with("artist", "Cher").with("track", "Believe"),
            CallKind::Write,
        )
        .unwrap();

        assert_eq!(request.params().get("sk"), Some("stored-session"));
    }

    #[test]
    fn test_write_prefers_caller_session_key() {
        let request = prepare(
            &full_credentials(),
            "track.love",
            Params::new().with("sk", "caller-session"),
            CallKind::Write,
        )
        .unwrap();

        assert_eq!(request.params().get("sk"), Some("caller-session"));
    }

    #[test]
    fn test_blank_caller_session_key_falls_back() {
        let request = prepare(
            &full_credentials(),
            "track.love",
            Params::new().with("sk", ""),
            CallKind::Write,
        )
        .unwrap();

        assert_eq!(request.params().get("sk"), Some("stored-session"));
    }

    #[test]
    fn test_write_without_any_session_key_fails() {
        let creds = Credentials::new("key", Some("secret".into()), None).unwrap();
        let err = prepare(&creds, "track.love", Params::new(), CallKind::Write).unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("session key required"));
    }

    #[test]
    fn test_caller_session_key_satisfies_gate() {
        let creds = Credentials::new("key", Some("secret".into()), None).unwrap();
        let request = prepare(
            &creds,
            "track.love",
            Params::new().with("sk", "caller-session"),
            CallKind::Write,
        );
        assert!(request.is_ok());
    }

    #[test]
    fn test_write_without_secret_fails_even_with_session() {
        let creds = Credentials::new("key", None, Some("stored-session".into())).unwrap();
        let err = prepare(&creds, "track.love", Params::new(), CallKind::Write).unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("secret required for signing"));
    }

    #[test]
    fn test_write_signature_covers_injected_params() {
        let request = prepare(
            &full_credentials(),
            "track.love",
            Params::new().with("artist", "Cher").with("track", "Believe"),
            CallKind::Write,
        )
        .unwrap();

        let mut unsigned = request.params().clone();
        let sig = unsigned.get("api_sig").map(str::to_string).unwrap();
        unsigned.insert("api_sig", "");
        assert_eq!(sig, sign(&unsigned, "secret"));
    }

    #[test]
    fn test_boolean_values_serialize_as_words() {
        let request = prepare(
            &full_credentials(),
            "user.getfriends",
            Params::new().with("recenttracks", true),
            CallKind::Read,
        )
        .unwrap();
        assert_eq!(request.params().get("recenttracks"), Some("true"));
    }
}
