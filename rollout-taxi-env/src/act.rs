//! Action for [`TaxiEnv`](crate::TaxiEnv).
use rollout_core::{error::RolloutError, Act};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

/// The six actions of the taxi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxiAct {
    /// Move one row down.
    South = 0,
    /// Move one row up.
    North = 1,
    /// Move one column right.
    East = 2,
    /// Move one column left.
    West = 3,
    /// Pick up the passenger.
    Pickup = 4,
    /// Drop off the passenger.
    Dropoff = 5,
}

impl TaxiAct {
    /// All actions, indexed by their integer value.
    pub const ALL: [TaxiAct; 6] = [
        TaxiAct::South,
        TaxiAct::North,
        TaxiAct::East,
        TaxiAct::West,
        TaxiAct::Pickup,
        TaxiAct::Dropoff,
    ];

    /// Name shown when rendering.
    pub fn name(&self) -> &'static str {
        match self {
            TaxiAct::South => "South",
            TaxiAct::North => "North",
            TaxiAct::East => "East",
            TaxiAct::West => "West",
            TaxiAct::Pickup => "Pickup",
            TaxiAct::Dropoff => "Dropoff",
        }
    }
}

impl Act for TaxiAct {}

impl TryFrom<i64> for TaxiAct {
    type Error = RolloutError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if (0..Self::ALL.len() as i64).contains(&v) {
            Ok(Self::ALL[v as usize])
        } else {
            Err(RolloutError::InvalidAction(v))
        }
    }
}

impl From<TaxiAct> for i64 {
    fn from(act: TaxiAct) -> Self {
        act as i64
    }
}

impl fmt::Display for TaxiAct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
