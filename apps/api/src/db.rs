use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects to the marketplace database and applies pending migrations.
pub async fn connect_marketplace(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .context("could not connect to the marketplace database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("marketplace migrations failed")?;

    info!("PostgreSQL pool ready, marketplace schema up to date");
    Ok(pool)
}
