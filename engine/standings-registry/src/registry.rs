//! Loading and validating the league table

use crate::error::{RegistryError, Result};
use scorebook::{Standings, Team};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// The league table the service starts from when no file is configured.
const EMBEDDED_SEED: &str = include_str!("../data/league_seed.json");

/// On-disk standings format: a flat list of team records.
#[derive(Debug, Deserialize)]
struct StandingsFile {
    teams: Vec<Team>,
}

/// Standings Registry - owns the starting league table.
///
/// The registry validates and normalizes the table once at load time; each
/// request then gets its own immutable [`Standings`] snapshot, so nothing
/// downstream can perturb the table between requests.
#[derive(Debug, Clone)]
pub struct StandingsRegistry {
    standings: Standings,
}

impl StandingsRegistry {
    /// Load the embedded seed table.
    pub fn embedded() -> Result<Self> {
        debug!("loading embedded seed standings");
        Self::from_json(EMBEDDED_SEED)
    }

    /// Load a standings file from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("loading standings from {:?}", path.as_ref());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_json(content: &str) -> Result<Self> {
        let file: StandingsFile = serde_json::from_str(content)?;
        if file.teams.is_empty() {
            return Err(RegistryError::EmptyTable);
        }

        let mut teams: Vec<Team> = Vec::with_capacity(file.teams.len());
        for mut team in file.teams {
            team.validate()?;
            // The cached NRR is never trusted from the file.
            team.refresh_nrr();
            if teams.iter().any(|t: &Team| t.name == team.name) {
                return Err(RegistryError::DuplicateTeam(team.name));
            }
            teams.push(team);
        }

        info!(team_count = teams.len(), "standings table loaded");
        Ok(Self { standings: Standings::from_teams(teams) })
    }

    /// An immutable snapshot of the table for one request.
    pub fn snapshot(&self) -> Standings {
        self.standings.clone()
    }

    pub fn team_count(&self) -> usize {
        self.standings.len()
    }
}
