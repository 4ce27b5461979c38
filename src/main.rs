pub mod bootstrap;
pub mod config;
pub mod error;
pub mod seed;

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ProvisionerConfig;
use crate::error::ProvisionError;

/// Brings a database from empty (or already provisioned) to the full
/// five-schema layout. Every step is individually idempotent, so a failed
/// run is fixed by re-running after the underlying cause is resolved; no
/// state is tracked outside the database itself.
#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), ProvisionError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ProvisionerConfig::from_env()?;

    info!("Starting schema provisioning...");

    // Database connection
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    // Order matters: tables reference schemas and extension-provided
    // defaults, so schemas and extensions come first.
    bootstrap::create_namespaces(&db).await?;
    bootstrap::enable_extensions(&db).await?;
    bootstrap::grant_ownership(&db, &config.app_user).await?;

    info!("Applying table migrations");
    Migrator::up(&db, None).await?;

    seed::seed_tags(&db).await?;

    info!("Schema provisioning complete");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Provisioning failed: {e}");
        std::process::exit(1);
    }
}
