//! Session handle extraction from the request cookie.

use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

/// Read the opaque session handle from the jar.
///
/// A missing cookie or an unparseable value both mean "no session" —
/// the caller is anonymous until it proves otherwise.
pub fn session_id(jar: &CookieJar, cookie_name: &str) -> Option<Uuid> {
    jar.get(cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}
