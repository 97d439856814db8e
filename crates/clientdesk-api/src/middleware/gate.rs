//! Request gate — per-request access control.
//!
//! Layered over the whole router, so it runs for every inbound request,
//! matched or not. It resolves the caller's session, writes exactly one
//! audit log record, and consults the access policy. Denied requests are
//! answered with a bare 401 and never reach the downstream handler.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use clientdesk_auth::policy;

use crate::extractors::session_id;
use crate::state::AppState;

/// Gate every request through the access policy.
pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    // Resolving the session counts as activity and applies lazy expiry.
    let session = session_id(&jar, &state.config.session.cookie_name)
        .and_then(|sid| state.sessions.get(sid));
    let authenticated = session.is_some();

    // Audit record: one line per inbound request, before the policy
    // check, denied requests included.
    let identity = session
        .as_ref()
        .map(|s| s.user.login.as_str())
        .unwrap_or("anonymous");
    info!(method = %method, path = %path, user = %identity, "Request");

    let decision = policy::evaluate(&path, method.as_str(), authenticated);
    if !decision.allow {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    next.run(request).await
}
