//! Error types for the ImpactGateway

use impact_engine::ImpactError;
use thiserror::Error;
use warp::http::StatusCode;

/// Result type for ImpactGateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur in the ImpactGateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Impact(#[from] ImpactError),

    #[error("standings error: {0}")]
    Registry(#[from] standings_registry::RegistryError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// The status the boundary reports for this error kind. Unattainable
    /// outcomes never reach here: they are successful answers.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Impact(ImpactError::UnknownTeam(_)) => StatusCode::NOT_FOUND,
            GatewayError::Impact(ImpactError::InfeasiblePosition { .. })
            | GatewayError::Impact(ImpactError::InvalidBracket { .. })
            | GatewayError::Impact(ImpactError::Score(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for the wire.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "INVALID_REQUEST",
            GatewayError::Impact(ImpactError::UnknownTeam(_)) => "UNKNOWN_TEAM",
            GatewayError::Impact(ImpactError::InfeasiblePosition { .. }) => "INFEASIBLE_POSITION",
            GatewayError::Impact(ImpactError::InvalidBracket { .. }) => "INVALID_BRACKET",
            GatewayError::Impact(ImpactError::Score(_)) => "DOMAIN_ERROR",
            GatewayError::Registry(_) => "STANDINGS_ERROR",
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::InvalidAddress(_) => "CONFIG_ERROR",
            GatewayError::Serialization(_) => "INTERNAL",
        }
    }
}
