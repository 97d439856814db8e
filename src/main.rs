//! ClientDesk Server — client, student, and account management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use clientdesk_core::config::AppConfig;
use clientdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CLIENTDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ClientDesk v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Record stores ────────────────────────────────────
    tracing::info!(
        "Initializing record stores (provider: {})...",
        config.database.provider
    );
    let stores = clientdesk_database::provider::StoreManager::new(&config.database).await?;
    tracing::info!("Record stores ready");

    // ── Step 2: Sessions and authentication ──────────────────────
    let sessions = Arc::new(clientdesk_auth::session::SessionStore::new(&config.session));
    let auth = Arc::new(clientdesk_auth::service::AuthService::new(
        Arc::clone(&stores.users),
        Arc::clone(&sessions),
    ));

    if config.bootstrap.seed_accounts {
        tracing::info!("Seeding well-known accounts...");
        auth.bootstrap().await;
    }

    // ── Step 3: Student registry ─────────────────────────────────
    let students = Arc::new(clientdesk_database::registry::StudentRegistry::seeded());

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = clientdesk_api::state::AppState {
        config: Arc::new(config.clone()),
        users: Arc::clone(&stores.users),
        clients: Arc::clone(&stores.clients),
        students,
        sessions,
        auth,
    };

    let app = clientdesk_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ClientDesk server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ClientDesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
