//! Standalone sweep worker.
//!
//! Runs the periodic status sweep over every active challenge so that
//! abandoned accounts still settle into `failed` without anyone opening
//! the app. Deploy one instance; the underlying transitions are
//! idempotent, so an accidental second instance is wasteful but safe.

use std::time::Duration;

use hardtrack_engine::sweep::StatusSweeper;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default pause between sweep passes, in seconds.
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hardtrack_worker=debug,hardtrack_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let sweep_interval_secs: u64 = std::env::var("SWEEP_INTERVAL_SECS")
        .unwrap_or_else(|_| DEFAULT_SWEEP_INTERVAL_SECS.to_string())
        .parse()
        .expect("SWEEP_INTERVAL_SECS must be a valid u64");

    let pool = hardtrack_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    hardtrack_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let cancel = CancellationToken::new();
    let sweeper = StatusSweeper::new(pool, Duration::from_secs(sweep_interval_secs));
    let sweeper_cancel = cancel.clone();
    let sweeper_handle = tokio::spawn(async move {
        sweeper.run(sweeper_cancel).await;
    });

    tracing::info!(interval_secs = sweep_interval_secs, "Status sweeper started");

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    tracing::info!("Received SIGINT (Ctrl-C), shutting down");

    cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), sweeper_handle).await;
    tracing::info!("Sweeper stopped");
}
