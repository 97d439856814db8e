//! Route definitions for the ClientDesk HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor. The access
//! gate is the outermost layer so it sees every inbound request,
//! including ones that match no route.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{any, delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(client_routes())
        .merge(student_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::access_gate,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, check, logout.
///
/// Wrong-method and unknown `/auth/*` requests are answered with 404
/// rather than 405: the auth surface is a closed set of four
/// verb-and-path pairs.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/register",
            post(handlers::auth::register).fallback(handlers::auth::not_found),
        )
        .route(
            "/auth/login",
            post(handlers::auth::login).fallback(handlers::auth::not_found),
        )
        .route(
            "/auth/check",
            get(handlers::auth::check).fallback(handlers::auth::not_found),
        )
        .route(
            "/auth/logout",
            get(handlers::auth::logout).fallback(handlers::auth::not_found),
        )
        .route("/auth/{*rest}", any(handlers::auth::not_found))
}

/// Client record CRUD
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(handlers::client::list))
        .route("/clients", post(handlers::client::create))
        .route("/clients", put(handlers::client::update))
        .route("/clients/{id}", get(handlers::client::get))
        .route("/clients/{id}", delete(handlers::client::delete))
}

/// Student registry endpoints
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(handlers::student::list))
        .route("/students", post(handlers::student::create))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
