//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use clientdesk_api::state::AppState;
use clientdesk_auth::service::AuthService;
use clientdesk_auth::session::SessionStore;
use clientdesk_core::config::AppConfig;
use clientdesk_database::memory::{MemoryClientStore, MemoryUserDirectory};
use clientdesk_database::registry::StudentRegistry;
use clientdesk_database::repositories::{ClientStore, UserDirectory};

/// Test application context backed by in-process stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// User directory, kept concrete for out-of-band manipulation
    pub users: Arc<MemoryUserDirectory>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the seed accounts in place.
    pub async fn new() -> Self {
        let config = AppConfig::default();

        let users = Arc::new(MemoryUserDirectory::new());
        let clients = Arc::new(MemoryClientStore::new());
        let sessions = Arc::new(SessionStore::new(&config.session));
        let auth = Arc::new(AuthService::new(
            Arc::clone(&users) as Arc<dyn UserDirectory>,
            Arc::clone(&sessions),
        ));
        auth.bootstrap().await;

        let state = AppState {
            config: Arc::new(config.clone()),
            users: Arc::clone(&users) as Arc<dyn UserDirectory>,
            clients: Arc::clone(&clients) as Arc<dyn ClientStore>,
            students: Arc::new(StudentRegistry::seeded()),
            sessions,
            auth,
        };

        let router = clientdesk_api::router::build_router(state);

        Self {
            router,
            users,
            config,
        }
    }

    /// Login and return the session cookie value.
    pub async fn login(&self, login: &str, password: &str) -> String {
        let body = format!("login={login}&password={password}");
        let response = self.post_form("/auth/login", &body, None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body.get("success"),
            Some(&Value::Bool(true)),
            "Login failed: {:?}",
            response.body
        );

        response
            .set_cookie
            .expect("No session cookie in login response")
    }

    /// Make a JSON request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(cookie) = cookie {
            req = req.header(
                "Cookie",
                format!("{}={}", self.config.session.cookie_name, cookie),
            );
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a form-encoded POST to the test app.
    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded");

        if let Some(cookie) = cookie {
            req = req.header(
                "Cookie",
                format!("{}={}", self.config.session.cookie_name, cookie),
            );
        }

        let req = req
            .body(Body::from(form.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();

        let cookie_prefix = format!("{}=", self.config.session.cookie_name);
        let set_cookie = response
            .headers()
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix(&cookie_prefix))
            .and_then(|v| v.split(';').next())
            .map(|v| v.to_string());

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Session cookie value from `Set-Cookie`, when present
    pub set_cookie: Option<String>,
}
