//! Credential resolution into a ready-to-use Basic-auth header value

use crate::config::Settings;
use crate::host::HostKind;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Resolve the credential pair for `host` into an `Authorization` header
/// value (`Basic <base64(username:password)>`).
///
/// Returns `None` when either half of the pair is missing or empty. That is
/// a defined "unavailable" outcome, not an error; callers treat it as
/// terminal for the request at hand.
pub fn authorization(host: HostKind, settings: &Settings) -> Option<String> {
    let creds = match host {
        HostKind::Public => &settings.github,
        HostKind::Enterprise => &settings.ghe,
    };
    let username = creds.username.as_deref().filter(|u| !u.is_empty())?;
    let password = creds.password.as_deref().filter(|p| !p.is_empty())?;

    let raw = format!("{}:{}", username, password);
    Some(format!("Basic {}", STANDARD.encode(raw)))
}
