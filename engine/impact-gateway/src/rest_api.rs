//! REST API endpoints for the ImpactGateway
//!
//! `POST /v1/match-impact` answers one match impact question;
//! `GET /health` reports liveness. Engine errors surface as JSON error
//! envelopes with the status mapping from [`crate::error`]; an unattainable
//! outcome is a 200 with `impossible: true` in the answer body.

use crate::error::GatewayResult;
use crate::messages::{ErrorResponse, MatchImpactRequest, MatchImpactResponse};
use crate::validation;
use chrono::Utc;
use impact_engine::{compute_match_impact, MatchImpactResult};
use parking_lot::RwLock;
use scorebook::Standings;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::Filter;

/// Shared gateway state: the current standings snapshot.
///
/// The lock exists for table refreshes between requests; each request clones
/// its own immutable snapshot and computes against that.
pub struct GatewayState {
    standings: RwLock<Standings>,
}

impl GatewayState {
    pub fn new(standings: Standings) -> Self {
        Self { standings: RwLock::new(standings) }
    }

    /// Immutable snapshot for one request.
    pub fn snapshot(&self) -> Standings {
        self.standings.read().clone()
    }

    /// Swap in a freshly loaded table.
    pub fn replace(&self, standings: Standings) {
        *self.standings.write() = standings;
    }
}

/// All gateway routes.
pub fn routes(
    state: Arc<GatewayState>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    health().or(match_impact(state))
}

fn health() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "ok" })))
}

fn match_impact(
    state: Arc<GatewayState>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("v1" / "match-impact")
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::any().map(move || state.clone()))
        .and_then(handle_match_impact)
}

async fn handle_match_impact(
    request: MatchImpactRequest,
    state: Arc<GatewayState>,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        your_team = %request.your_team,
        opponent = %request.opponent_team,
        desired_position = request.desired_position,
        "match impact request"
    );

    match process(&request, &state) {
        Ok(result) => {
            let response =
                MatchImpactResponse { request_id, generated_at: Utc::now(), result };
            Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK))
        }
        Err(err) => {
            warn!(%request_id, error = %err, "match impact request failed");
            let body = ErrorResponse { code: err.code().to_string(), message: err.to_string() };
            Ok(warp::reply::with_status(warp::reply::json(&body), err.status_code()))
        }
    }
}

fn process(request: &MatchImpactRequest, state: &GatewayState) -> GatewayResult<MatchImpactResult> {
    validation::validate(request)?;
    let snapshot = state.snapshot();
    Ok(compute_match_impact(&request.clone().into(), &snapshot)?)
}
