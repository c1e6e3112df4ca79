//! League table entry for a single team

use crate::error::ScoreError;
use crate::overs::Overs;
use crate::run_rate;
use crate::POINTS_PER_WIN;
use serde::{Deserialize, Serialize};

/// One row of the league table: cumulative record plus the cached NRR.
///
/// Invariants: `matches = won + lost` and `points = 2 x won` (the model
/// assumes no ties or abandoned matches). `nrr` is derived from the four
/// cumulative run/over fields and can always be recomputed; loaders should
/// call [`Team::refresh_nrr`] rather than trusting a stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub matches: u32,
    pub won: u32,
    pub lost: u32,
    pub points: u32,
    pub for_runs: u32,
    pub against_runs: u32,
    pub for_overs: Overs,
    pub against_overs: Overs,
    /// Cached net run rate, truncated to three decimals.
    #[serde(default)]
    pub nrr: f64,
}

impl Team {
    /// Check the record invariants without touching the cached NRR.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.matches != self.won + self.lost {
            return Err(ScoreError::MatchCountMismatch {
                name: self.name.clone(),
                matches: self.matches,
                won: self.won,
                lost: self.lost,
            });
        }
        if self.points != POINTS_PER_WIN * self.won {
            return Err(ScoreError::PointsMismatch {
                name: self.name.clone(),
                points: self.points,
                won: self.won,
            });
        }
        Ok(())
    }

    /// Recompute the cached NRR from the cumulative fields.
    pub fn refresh_nrr(&mut self) {
        self.nrr = run_rate::current_nrr(self);
    }
}
