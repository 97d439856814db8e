//! Access policy evaluation.
//!
//! A pure mapping from (path, method, authentication state) to an allow
//! or deny decision, independent of the transport layer. The rule set is
//! a flat two-tier policy: anonymous callers may read, authenticated
//! callers may do anything. No role distinctions.

/// Resource prefix whose non-GET operations require authentication.
const PROTECTED_PREFIX: &str = "/clients";

/// Outcome of a policy evaluation for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessDecision {
    /// Whether the request may proceed.
    pub allow: bool,
    /// Whether the path/method pair is protected at all.
    pub requires_auth: bool,
}

impl AccessDecision {
    fn allowed(requires_auth: bool) -> Self {
        Self {
            allow: true,
            requires_auth,
        }
    }

    fn denied() -> Self {
        Self {
            allow: false,
            requires_auth: true,
        }
    }
}

/// Decide whether a request may proceed.
///
/// A request is protected iff its path starts with `/clients`, except the
/// exact pair (`/clients`, `GET`) which is public listing. Unprotected
/// requests are always allowed. Protected requests are allowed for
/// authenticated callers unconditionally; anonymous callers are allowed
/// only for GET.
///
/// Note the asymmetry: anonymous `GET /clients/5` is protected-but-GET
/// and falls through to allow. Only non-GET methods under the prefix are
/// actually blocked for anonymous callers.
pub fn evaluate(path: &str, method: &str, authenticated: bool) -> AccessDecision {
    if !is_protected(path, method) {
        return AccessDecision::allowed(false);
    }

    if authenticated || method == "GET" {
        return AccessDecision::allowed(true);
    }

    AccessDecision::denied()
}

/// A path/method pair is protected iff it touches the clients resource,
/// except the public listing itself.
fn is_protected(path: &str, method: &str) -> bool {
    if path.starts_with(PROTECTED_PREFIX) {
        if path == PROTECTED_PREFIX && method == "GET" {
            return false;
        }
        return true;
    }
    false
}
