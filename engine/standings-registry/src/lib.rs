//! Standings Registry - the league table snapshot provider
//!
//! Loads the starting league table from a JSON file or the embedded seed,
//! checks the record invariants, and recomputes every cached net run rate
//! before handing out immutable snapshots to the impact engine.

mod error;
mod registry;

pub use error::{RegistryError, Result};
pub use registry::StandingsRegistry;
