//! ministry-seed - one-shot bootstrap of reference content
//!
//! Creates the schema if needed, then seeds denominations and beliefs, the
//! anchor denomination's beliefs, apologetics material and the admin
//! account. Safe to run repeatedly.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ministry_common::config::{ConfigOverrides, RootFolderInitializer, Settings};
use ministry_common::db::init_database;
use ministry_web::seed;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ministry-seed")]
#[command(about = "Seed the ministry database with reference content")]
#[command(version)]
struct Args {
    /// Root folder holding ministry.db
    #[arg(short, long, env = "MINISTRY_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Password for a newly created admin account
    #[arg(long, env = "MINISTRY_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let settings = Settings::resolve(
        "ministry-seed",
        &ConfigOverrides {
            root_folder: args.root_folder,
            config_file: args.config,
            ..ConfigOverrides::default()
        },
    );

    let initializer = RootFolderInitializer::new(settings.root_folder.clone());
    initializer.ensure_directory_exists()?;
    let db_path = initializer.database_path();
    info!("Seeding database {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .with_context(|| format!("Failed to open {}", db_path.display()))?;

    let report = seed::seed_all(&pool, args.admin_password.as_deref())
        .await
        .context("Seeding failed")?;

    if report.is_empty() {
        info!("Nothing to seed; database already populated");
    } else {
        info!("Seed complete: {}", report);
    }

    pool.close().await;
    Ok(())
}
