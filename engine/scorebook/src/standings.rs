//! League standings snapshot and ranking order

use crate::team::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

/// Canonical league order: points descending, ties broken by NRR descending.
///
/// No further tie-break exists; callers needing determinism rely on the
/// snapshot's name-ordered iteration feeding a stable sort.
pub fn standings_order(a: &Team, b: &Team) -> Ordering {
    b.points.cmp(&a.points).then(b.nrr.total_cmp(&a.nrr))
}

/// An immutable league-table snapshot keyed by team name.
///
/// Loaded fresh per request by the standings provider; the engine never
/// mutates a snapshot in place, it derives hypothetical copies and discards
/// them. Iteration order is name order, which keeps every derived ranking
/// deterministic for identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    teams: BTreeMap<String, Team>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_teams<I: IntoIterator<Item = Team>>(teams: I) -> Self {
        let teams: BTreeMap<String, Team> =
            teams.into_iter().map(|t| (t.name.clone(), t)).collect();
        trace!(team_count = teams.len(), "standings snapshot built");
        Self { teams }
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// All teams in name order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// The table sorted by [`standings_order`].
    pub fn ranked(&self) -> Vec<&Team> {
        let mut table: Vec<&Team> = self.teams.values().collect();
        table.sort_by(|a, b| standings_order(a, b));
        table
    }

    /// 1-based league position of a team, if present.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.ranked().iter().position(|t| t.name == name).map(|i| i + 1)
    }
}
