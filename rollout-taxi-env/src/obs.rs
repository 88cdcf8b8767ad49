use crate::TaxiState;
use rollout_core::Obs;

/// Observation of [`TaxiEnv`](crate::TaxiEnv): the encoded state in `0..500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxiObs(pub u16);

impl TaxiObs {
    /// Decodes the observation into taxi position, passenger and destination.
    pub fn state(&self) -> Option<TaxiState> {
        TaxiState::decode(self.0)
    }
}

impl From<TaxiState> for TaxiObs {
    fn from(s: TaxiState) -> Self {
        Self(s.encode())
    }
}

impl Obs for TaxiObs {}
