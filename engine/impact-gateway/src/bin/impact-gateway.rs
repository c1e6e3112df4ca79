//! ImpactGateway server bootstrap

use anyhow::Context;
use impact_gateway::{routes, GatewayConfig, GatewayState};
use standings_registry::StandingsRegistry;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let config = GatewayConfig::load(config_path.as_deref())
        .context("failed to load gateway configuration")?;

    let registry = match &config.standings.seed_path {
        Some(path) => StandingsRegistry::load_from_file(path)
            .with_context(|| format!("failed to load standings from {path}"))?,
        None => StandingsRegistry::embedded().context("failed to load embedded standings")?,
    };
    info!(teams = registry.team_count(), "standings table ready");

    let state = Arc::new(GatewayState::new(registry.snapshot()));
    let addr = config.socket_addr().context("invalid listen address")?;
    info!(%addr, "impact gateway listening");

    warp::serve(routes(state)).run(addr).await;
    Ok(())
}
