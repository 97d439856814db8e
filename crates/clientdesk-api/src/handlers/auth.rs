//! Authentication endpoints.
//!
//! All four operations answer 200 with a JSON outcome body; success or
//! failure of the operation itself is carried in the payload, not the
//! status code.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::extractors::session_id;
use crate::state::AppState;

/// `POST /auth/register` — create a new account with role `user`.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterRequest>,
) -> impl IntoResponse {
    let outcome = state
        .auth
        .register(&form.login, &form.password, &form.full_name, &form.email)
        .await;
    Json(outcome)
}

/// `POST /auth/login` — authenticate and bind the session.
///
/// Reuses the caller's existing session handle when the cookie carries
/// one, otherwise mints a fresh handle. The cookie is only set on a
/// successful login.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginRequest>,
) -> impl IntoResponse {
    let cookie_name = state.config.session.cookie_name.clone();
    let sid = session_id(&jar, &cookie_name).unwrap_or_else(Uuid::new_v4);

    let outcome = state.auth.login(&form.login, &form.password, sid).await;

    let jar = if outcome.success {
        let cookie = Cookie::build((cookie_name, sid.to_string()))
            .path("/")
            .http_only(true)
            .build();
        jar.add(cookie)
    } else {
        jar
    };

    (jar, Json(outcome))
}

/// `GET /auth/check` — report whether the session is authenticated.
pub async fn check(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let sid = session_id(&jar, &state.config.session.cookie_name);
    let outcome = state.auth.check_auth(sid).await;
    Json(outcome)
}

/// `GET /auth/logout` — invalidate the session and drop the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie_name = state.config.session.cookie_name.clone();
    let sid = session_id(&jar, &cookie_name);
    let outcome = state.auth.logout(sid);

    let jar = jar.remove(Cookie::build((cookie_name, "")).path("/").build());
    (jar, Json(outcome))
}

/// Catch-all for unrecognized `/auth/*` paths.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
