//! Applies the Keyturn schema to the configured database.
//!
//! Reads the same layered configuration as the services (`.env`,
//! `config/<env>.toml`, `APP__*` variables), so it fails fast on a missing
//! secret just as a service would.

use std::process::ExitCode;

use kt_infra::database::DatabasePool;
use kt_infra::InfrastructureError;
use kt_shared::{telemetry, AppConfig};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Migration failed");
            eprintln!("keyturn-migrate: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), InfrastructureError> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting keyturn-migrate");

    let pool = DatabasePool::new(config.database.clone()).await?;
    if !pool.health_check().await? {
        return Err(InfrastructureError::Config(
            "database health check returned an unexpected value".to_string(),
        ));
    }

    pool.run_migrations().await?;
    tracing::info!(stats = %pool.get_statistics(), "Schema is up to date");

    pool.close().await;
    Ok(())
}
