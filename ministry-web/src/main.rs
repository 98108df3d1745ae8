//! ministry-web - pastoral ministry web application
//!
//! Serves the doctrine, sermon, counseling, resource and apologetics pages
//! from a SQLite database in the resolved root folder.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use ministry_common::config::{ConfigOverrides, LoggingConfig, RootFolderInitializer, Settings};
use ministry_common::db::init_database;
use ministry_web::db::sessions;
use ministry_web::{build_router, seed, AppConfig, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ministry-web")]
#[command(about = "Pastoral ministry web application")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "MINISTRY_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "MINISTRY_BIND")]
    bind: Option<String>,

    /// Root folder holding ministry.db
    #[arg(short, long, env = "MINISTRY_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed reference content and the admin account before serving
    #[arg(long)]
    seed: bool,

    /// Password for a newly seeded admin account
    #[arg(long, env = "MINISTRY_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,
}

/// Stderr logging, plus a log file when configured. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},tower_http=info", logging.level).into());

    let file_layer = match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::resolve(
        "ministry-web",
        &ConfigOverrides {
            root_folder: args.root_folder.clone(),
            port: args.port,
            bind_address: args.bind.clone(),
            config_file: args.config.clone(),
        },
    );

    init_tracing(&settings.logging)?;

    info!(
        "Starting ministry-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Root folder: {}", settings.root_folder.display());

    let initializer = RootFolderInitializer::new(settings.root_folder.clone());
    initializer.ensure_directory_exists()?;
    let db_path = initializer.database_path();

    let pool = match init_database(&db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database {}: {}", db_path.display(), e);
            return Err(e.into());
        }
    };

    match sessions::delete_expired_sessions(&pool).await {
        Ok(0) => {}
        Ok(removed) => info!("Removed {} expired session(s)", removed),
        Err(e) => warn!("Could not purge expired sessions: {}", e),
    }

    if args.seed {
        let report = seed::seed_all(&pool, args.admin_password.as_deref())
            .await
            .context("Seeding failed")?;
        info!("Seed complete: {}", report);
    }

    let state = AppState::new(pool, AppConfig::from(&settings));
    let app = build_router(state);

    let addr = settings.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("ministry-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("ministry-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
