//! Configuration for the ImpactGateway

use crate::error::GatewayResult;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main configuration for the ImpactGateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Standings source configuration
    pub standings: StandingsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Standings source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StandingsConfig {
    /// Path to a standings JSON file; the embedded seed is used when unset.
    pub seed_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8095 }
    }
}

impl GatewayConfig {
    /// Load configuration from an optional TOML file with environment
    /// overrides (`IMPACT_GATEWAY_SERVER__PORT=9000` style).
    pub fn load(path: Option<&str>) -> GatewayResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("IMPACT_GATEWAY").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The socket address to serve on.
    pub fn socket_addr(&self) -> GatewayResult<SocketAddr> {
        Ok(format!("{}:{}", self.server.host, self.server.port).parse()?)
    }
}
