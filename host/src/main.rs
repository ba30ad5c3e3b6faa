//! HealthTrack dashboard report
//!
//! Prints the dashboard summary for one user as JSON:
//!
//! ```text
//! healthtrack <user-id> [YYYY-MM-DD]
//! ```
//!
//! The date defaults to today on the local clock.

use anyhow::{bail, Context, Result};
use healthtrack_host::config::{HostConfig, LoggingConfig};
use healthtrack_host::services::DashboardService;
use healthtrack_host::store::JsonFileStore;
use healthtrack_shared::validation::parse_iso_date;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = HostConfig::load()?;
    init_tracing(&config.logging);

    let mut args = std::env::args().skip(1);
    let Some(raw_user_id) = args.next() else {
        bail!("usage: healthtrack <user-id> [YYYY-MM-DD]");
    };
    let user_id: u64 = raw_user_id
        .parse()
        .with_context(|| format!("invalid user id '{raw_user_id}'"))?;
    let today = match args.next() {
        Some(raw) => parse_iso_date(&raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let store = JsonFileStore::new(&config.store.path);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %store.path().display(),
        user_id,
        %today,
        "Building dashboard summary"
    );

    let service = DashboardService::new(store, config.goals);
    let summary = service.summary(user_id, today)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_str().into());

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if logging.json || HostConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
