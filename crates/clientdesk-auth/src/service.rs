//! Authentication service — register, login, logout, and session
//! re-validation.
//!
//! Every operation resolves failures locally into a structured outcome;
//! storage errors are caught at this boundary and reported as generic
//! failures rather than propagating to the transport layer. Session state
//! either transitions fully or not at all.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use clientdesk_database::repositories::UserDirectory;
use clientdesk_entity::user::{NewUser, User};

use crate::password::PasswordHasher;
use crate::session::SessionStore;

/// User fields exposed in auth responses. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// User id.
    pub id: i32,
    /// Login name.
    pub login: String,
    /// Role tag.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            role: user.role.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Result of a register, login, or logout operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// The authenticated user, present on successful login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

impl AuthOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}

/// Result of a session re-validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the session is bound to a live user.
    pub authenticated: bool,
    /// The refreshed user snapshot, present when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

impl CheckOutcome {
    fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
        }
    }
}

/// Business logic for the authentication lifecycle:
/// `Anonymous → Authenticated → (Invalidated | Expired) → Anonymous`.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserDirectory>,
    sessions: Arc<SessionStore>,
    hasher: PasswordHasher,
}

impl AuthService {
    /// Create an authentication service over the given directory and
    /// session store.
    pub fn new(users: Arc<dyn UserDirectory>, sessions: Arc<SessionStore>) -> Self {
        Self {
            users,
            sessions,
            hasher: PasswordHasher::new(),
        }
    }

    /// Ensure the well-known `admin` and `user` accounts exist.
    ///
    /// Idempotent: each account is created only if a lookup by its login
    /// currently fails. Storage errors are logged and never fatal.
    pub async fn bootstrap(&self) {
        self.seed_account("admin", "admin123", "admin", "Administrator", "admin@example.com")
            .await;
        self.seed_account("user", "user123", "user", "Regular User", "user@example.com")
            .await;
    }

    async fn seed_account(&self, login: &str, password: &str, role: &str, full_name: &str, email: &str) {
        let existing = match self.users.find_by_login(login).await {
            Ok(existing) => existing,
            Err(e) => {
                warn!(login, error = %e, "Failed to check seed account");
                return;
            }
        };
        if existing.is_some() {
            return;
        }

        let hash = match self.hasher.hash_password(password) {
            Ok(hash) => hash,
            Err(e) => {
                warn!(login, error = %e, "Failed to hash seed password");
                return;
            }
        };

        match self
            .users
            .create(NewUser {
                login: login.to_string(),
                password: hash,
                role: role.to_string(),
                full_name: full_name.to_string(),
                email: email.to_string(),
            })
            .await
        {
            Ok(user) => info!(login, id = user.id, "Created seed account"),
            Err(e) => warn!(login, error = %e, "Failed to create seed account"),
        }
    }

    /// Register a new user with role fixed to `"user"`.
    ///
    /// Does not log the caller in. Duplicate logins (case-sensitive exact
    /// match) are rejected before insert; the directory's own uniqueness
    /// check remains the backstop against concurrent registrations.
    pub async fn register(
        &self,
        login: &str,
        password: &str,
        full_name: &str,
        email: &str,
    ) -> AuthOutcome {
        if login.is_empty() || password.is_empty() {
            return AuthOutcome::fail("Login and password are required");
        }

        match self.users.find_by_login(login).await {
            Ok(Some(_)) => {
                return AuthOutcome::fail("A user with this login already exists");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(login, error = %e, "Directory lookup failed during registration");
                return AuthOutcome::fail("Registration failed");
            }
        }

        let hash = match self.hasher.hash_password(password) {
            Ok(hash) => hash,
            Err(e) => {
                warn!(login, error = %e, "Password hashing failed during registration");
                return AuthOutcome::fail("Registration failed");
            }
        };

        match self
            .users
            .create(NewUser {
                login: login.to_string(),
                password: hash,
                role: "user".to_string(),
                full_name: full_name.to_string(),
                email: email.to_string(),
            })
            .await
        {
            Ok(user) => {
                info!(login, id = user.id, "Registered new user");
                AuthOutcome::ok("Registration successful")
            }
            Err(e) => {
                warn!(login, error = %e, "Failed to create user");
                AuthOutcome::fail("Registration failed")
            }
        }
    }

    /// Authenticate and bind the session to the user.
    ///
    /// On success the session holds the full user snapshot and cached
    /// role; on any failure the session is left untouched.
    pub async fn login(&self, login: &str, password: &str, session_id: Uuid) -> AuthOutcome {
        let user = match self.users.find_by_login(login).await {
            Ok(Some(user)) => user,
            Ok(None) => return AuthOutcome::fail("User not found"),
            Err(e) => {
                warn!(login, error = %e, "Directory lookup failed during login");
                return AuthOutcome::fail("Server error during login");
            }
        };

        match self.hasher.verify_password(password, &user.password) {
            Ok(true) => {}
            Ok(false) => {
                warn!(login, "Failed login attempt");
                return AuthOutcome::fail("Invalid password");
            }
            Err(e) => {
                warn!(login, error = %e, "Password verification failed");
                return AuthOutcome::fail("Server error during login");
            }
        }

        let info = UserInfo::from(&user);
        self.sessions.bind(session_id, user);
        info!(login, role = %info.role, "User logged in");

        AuthOutcome {
            success: true,
            message: "Login successful".to_string(),
            user: Some(info),
        }
    }

    /// Invalidate the session, discarding all of its state.
    pub fn logout(&self, session_id: Option<Uuid>) -> AuthOutcome {
        let Some(session_id) = session_id else {
            return AuthOutcome::fail("No active session");
        };

        match self.sessions.get(session_id) {
            Some(data) => {
                self.sessions.invalidate(session_id);
                info!(login = %data.user.login, "User logged out");
                AuthOutcome::ok("Logged out")
            }
            None => AuthOutcome::fail("No active session"),
        }
    }

    /// Re-validate the session against the directory.
    ///
    /// A bound session re-reads the user's current record by id so that
    /// out-of-band changes are reflected; if the user is gone, the session
    /// is invalidated. An unbound session reports anonymous without
    /// touching storage.
    pub async fn check_auth(&self, session_id: Option<Uuid>) -> CheckOutcome {
        let Some(session_id) = session_id else {
            return CheckOutcome::anonymous();
        };

        let Some(data) = self.sessions.get(session_id) else {
            return CheckOutcome::anonymous();
        };

        match self.users.find_by_id(data.user.id).await {
            Ok(Some(user)) => {
                let info = UserInfo::from(&user);
                self.sessions.refresh(session_id, user);
                CheckOutcome {
                    authenticated: true,
                    user: Some(info),
                }
            }
            Ok(None) => {
                // The user was deleted out-of-band; the session dies with it.
                self.sessions.invalidate(session_id);
                CheckOutcome::anonymous()
            }
            Err(e) => {
                warn!(error = %e, "Directory lookup failed during auth check");
                CheckOutcome::anonymous()
            }
        }
    }
}
