//! CilliBlog Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use tracing_subscriber::{EnvFilter, fmt};

use blog_api::{AppState, build_router};
use blog_auth::authenticator::Authenticator;
use blog_auth::jwt::{JwtDecoder, JwtEncoder};
use blog_auth::password::{PasswordHasher, PasswordValidator};
use blog_core::config::{AppConfig, DatabaseProvider};
use blog_core::error::AppError;
use blog_database::BlogDatabase;
use blog_database::memory::{MemoryBlogStore, MemoryUserStore};
use blog_database::store::{BlogStore, UserStore};
use blog_service::blog::BlogService;
use blog_service::user::UserService;
use blog_storage::build_image_storage;

#[tokio::main]
async fn main() {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => eprintln!("Failed to read .env file: {e}"),
        _ => {}
    }

    let env = std::env::var("BLOG_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
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
    tracing::info!("Starting CilliBlog v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Stores ───────────────────────────────────────────
    let (users, blogs, database) = open_stores(&config).await?;

    // ── Step 2: Image storage ────────────────────────────────────
    tracing::info!(provider = ?config.storage.provider, "Initializing image storage...");
    let images = build_image_storage(&config.storage).await?;

    // ── Step 3: Auth ─────────────────────────────────────────────
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(
        JwtDecoder::new(&config.auth),
        Arc::clone(&users),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&users),
        Arc::clone(&images),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
        encoder,
    ));
    let blog_service = Arc::new(BlogService::new(blogs, images));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState {
        config: Arc::new(config),
        authenticator,
        user_service,
        blog_service,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("CilliBlog server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    let drain_deadline = async move {
        let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = drain_deadline => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Graceful shutdown timed out, dropping open connections"
            );
        }
    }

    if let Some(database) = database {
        database.close().await;
    }

    tracing::info!("CilliBlog server shut down gracefully");
    Ok(())
}

/// Open the configured user and blog stores.
async fn open_stores(
    config: &AppConfig,
) -> Result<(Arc<dyn UserStore>, Arc<dyn BlogStore>, Option<BlogDatabase>), AppError> {
    match config.database.provider {
        DatabaseProvider::Postgres => {
            let database = BlogDatabase::open(&config.database).await?;
            Ok((database.user_store(), database.blog_store(), Some(database)))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory stores; data is lost on restart");
            let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
            let blogs: Arc<dyn BlogStore> = Arc::new(MemoryBlogStore::new());
            Ok((users, blogs, None))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
