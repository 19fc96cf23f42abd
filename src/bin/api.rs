//! Genealina Development Backend
//!
//! Run with: cargo run --bin genealina-api
//!
//! Serves the `contacts` routes from memory on the local origin so the
//! dashboard and the CLI work without the deployed backend.
//!
//! # Configuration
//!
//! Read from the first default config location that exists, then the
//! environment. A file that fails to parse stops startup. Environment:
//! - `GENEALINA_DEV_HOST`: Host to bind to (default: 127.0.0.1)
//! - `GENEALINA_DEV_PORT`: Port to listen on (default: 3001)
//! - `GENEALINA_LOG_LEVEL` / `GENEALINA_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter

use anyhow::Context;
use genealina::{config::Config, logging, ContactStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default().context("Failed to load configuration")?;
    logging::init(&config.logging);

    tracing::info!(
        "Starting Genealina contacts backend v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = if config.dev_server.seed_demo {
        let store = ContactStore::with_demo_data().await;
        tracing::info!("Seeded {} demo contacts", store.len().await);
        store
    } else {
        ContactStore::new()
    };

    genealina::serve(store, &config.dev_server)
        .await
        .with_context(|| format!("Backend on {} failed", config.dev_server.addr()))?;

    tracing::info!("Genealina contacts backend stopped");
    Ok(())
}
