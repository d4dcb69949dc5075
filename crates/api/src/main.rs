// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Contract Info API Server
//!
//! Read-only account, token and NFT information backed by an Ethereum node.

use anyhow::Result;
use contract_api::{Server, ServerConfig, ShutdownConfig};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A panic anywhere leaves the process in an unknown state
    std::panic::set_hook(Box::new(|panic_info| {
        error!(%panic_info, "unrecoverable panic, exiting");
        std::process::exit(1);
    }));

    info!("Starting contract info API server with coordinated shutdown support");

    let config = ServerConfig::from_env()?;

    let server = Server::new(config, ShutdownConfig::default())?;

    // NOTE: the `#[tokio::main]` task does not run a worker future, we must spawn
    if let Err(e) = tokio::spawn(async move { server.run().await }).await? {
        error!(error = %e, "server terminated with a fatal error");
        return Err(e.into());
    }

    Ok(())
}
