//! Overs arithmetic
//!
//! Cricket counts time in overs of six balls. An [`Overs`] value carries the
//! pair `(overs, balls)` with `balls < 6`; constructors normalize by carrying
//! surplus balls into whole overs. Two numeric projections exist and must not
//! be confused: [`Overs::as_decimal`] (`overs + balls/6`, used in all run-rate
//! arithmetic) and [`Overs::display`] (the scorecard numeral `overs.balls`,
//! where `14.4` means 14 overs 4 balls, used only for reporting).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Balls bowled per over.
pub const BALLS_PER_OVER: u32 = 6;

/// A bowled-overs count with the `balls < 6` invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawOvers")]
pub struct Overs {
    overs: u32,
    balls: u32,
}

/// Unvalidated wire form; normalized on the way in rather than rejected.
#[derive(Deserialize)]
struct RawOvers {
    overs: u32,
    #[serde(default)]
    balls: u32,
}

impl From<RawOvers> for Overs {
    fn from(raw: RawOvers) -> Self {
        Overs::new(raw.overs, raw.balls)
    }
}

impl Overs {
    /// Build from an `(overs, balls)` pair, carrying `balls >= 6` into overs.
    pub fn new(overs: u32, balls: u32) -> Self {
        Self { overs: overs + balls / BALLS_PER_OVER, balls: balls % BALLS_PER_OVER }
    }

    /// A whole number of overs, no loose balls.
    pub fn whole(overs: u32) -> Self {
        Self { overs, balls: 0 }
    }

    /// Decompose a raw ball count into whole overs and remainder balls.
    pub fn from_balls(total_balls: u32) -> Self {
        Self::new(0, total_balls)
    }

    pub fn overs(&self) -> u32 {
        self.overs
    }

    pub fn balls(&self) -> u32 {
        self.balls
    }

    pub fn total_balls(&self) -> u32 {
        self.overs * BALLS_PER_OVER + self.balls
    }

    /// Calculation-grade projection: `overs + balls/6`.
    pub fn as_decimal(&self) -> f64 {
        self.overs as f64 + self.balls as f64 / BALLS_PER_OVER as f64
    }

    /// Display-grade projection: the scorecard numeral `overs.balls`.
    ///
    /// This is digit concatenation, not division: 13 overs 4 balls displays
    /// as `13.4`. Never feed this value back into run-rate arithmetic.
    pub fn display(&self) -> f64 {
        self.overs as f64 + self.balls as f64 / 10.0
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.overs, self.balls)
    }
}
