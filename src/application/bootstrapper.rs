//! Application bootstrapper
//!
//! Brings up logging and the database for the `ecotrip` binary.

use sea_orm::{EntityTrait, PaginatorTrait};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG;
use crate::db;
use crate::models::prelude::*;

/// Bootstrap the data layer: connect, migrate and report what is there
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Ecotrip data layer v{}", CONFIG.version);

    let conn = db::connect().await?;

    let users = User::find().count(&conn).await?;
    let challenges = Challenge::find().count(&conn).await?;
    let factors = CarbonFactor::find().count(&conn).await?;
    tracing::info!(
        users,
        challenges,
        carbon_factors = factors,
        "Database ready"
    );

    if factors == 0 {
        tracing::warn!("No carbon factors configured; trips will earn no CO2 credit");
    }

    Ok(())
}

/// Initialize tracing/logging
pub fn init_tracing() {
    // A subscriber may already be installed (e.g. by an embedding service)
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ecotrip={}", CONFIG.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .try_init();
}
