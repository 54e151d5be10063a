// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use fabstir_sitegen::{api::start_server, config::SiteGenConfig, version};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());

    let config = SiteGenConfig::from_env();
    config.validate().map_err(|e| anyhow!("invalid configuration: {}", e))?;

    let status = config.credential_status();
    info!(
        openai = status.openai,
        anthropic = status.anthropic,
        stability = status.stability,
        "Provider credentials loaded"
    );
    if !config.has_text_provider() {
        warn!("No text provider configured; generation requests will fail until a key is set");
    }
    if !status.stability {
        warn!("STABILITY_API_KEY not set; sites will use fallback imagery");
    }

    tokio::select! {
        result = start_server(config) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}
