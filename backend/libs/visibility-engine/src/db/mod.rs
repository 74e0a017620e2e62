//! Database access layer: the fixed set of fact-loading queries.
//!
//! Each repo module holds the queries for one fact concern. The decision
//! logic never composes SQL; it only consumes what these queries load.

pub mod account_repo;
pub mod chat_repo;
pub mod content_repo;
pub mod listing_repo;
pub mod override_repo;
pub mod share_link_repo;
pub mod social_repo;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

/// Create the Postgres connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "database pool created"
    );

    Ok(pool)
}
