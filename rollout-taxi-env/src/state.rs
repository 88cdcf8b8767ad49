//! State of the taxi world and its transition function.
use crate::{
    map::{can_move_east, can_move_west, loc_index, LOCS, NUM_COLS, NUM_ROWS},
    TaxiAct,
};

/// Passenger location index meaning the passenger is in the taxi.
pub const IN_TAXI: usize = 4;

/// Number of encoded states.
pub const NUM_STATES: usize = NUM_ROWS * NUM_COLS * 5 * 4;

/// Reward of every step that is not an illegal pickup/dropoff or a delivery.
pub const REWARD_STEP: f32 = -1.0;

/// Reward of a pickup or dropoff at the wrong place.
pub const REWARD_ILLEGAL: f32 = -10.0;

/// Reward of delivering the passenger to the destination.
pub const REWARD_DELIVERY: f32 = 20.0;

/// Decoded state: taxi position, passenger location and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxiState {
    /// Row of the taxi.
    pub taxi_row: usize,

    /// Column of the taxi.
    pub taxi_col: usize,

    /// Index into [`LOCS`], or [`IN_TAXI`].
    pub pass_loc: usize,

    /// Index into [`LOCS`].
    pub dest: usize,
}

impl TaxiState {
    /// Encodes the state as `((row * 5 + col) * 5 + pass_loc) * 4 + dest`.
    pub fn encode(&self) -> u16 {
        let mut i = self.taxi_row;
        i = i * NUM_COLS + self.taxi_col;
        i = i * 5 + self.pass_loc;
        i = i * 4 + self.dest;
        i as u16
    }

    /// Decodes a state index. Returns `None` for indices out of range.
    pub fn decode(s: u16) -> Option<Self> {
        let mut i = s as usize;
        if i >= NUM_STATES {
            return None;
        }
        let dest = i % 4;
        i /= 4;
        let pass_loc = i % 5;
        i /= 5;
        let taxi_col = i % NUM_COLS;
        i /= NUM_COLS;
        Some(Self {
            taxi_row: i,
            taxi_col,
            pass_loc,
            dest,
        })
    }

    /// Samples an initial state.
    ///
    /// The taxi is anywhere and the passenger waits at a landmark other than the
    /// destination, uniformly over the 300 such states.
    pub fn sample_initial(rng: &mut fastrand::Rng) -> Self {
        let pass_loc = rng.usize(..LOCS.len());
        let mut dest = rng.usize(..LOCS.len() - 1);
        if dest >= pass_loc {
            dest += 1;
        }
        Self {
            taxi_row: rng.usize(..NUM_ROWS),
            taxi_col: rng.usize(..NUM_COLS),
            pass_loc,
            dest,
        }
    }

    /// `true` if the passenger waits at a landmark and is not at the destination.
    pub fn is_initial(&self) -> bool {
        self.pass_loc < IN_TAXI && self.pass_loc != self.dest
    }

    fn taxi_loc(&self) -> (usize, usize) {
        (self.taxi_row, self.taxi_col)
    }

    /// Applies an action. Returns the next state, the reward and whether the
    /// passenger has been delivered.
    pub fn transition(&self, act: TaxiAct) -> (Self, f32, bool) {
        let mut next = *self;
        let mut reward = REWARD_STEP;
        let mut terminated = false;
        let (row, col) = self.taxi_loc();

        match act {
            TaxiAct::South => next.taxi_row = (row + 1).min(NUM_ROWS - 1),
            TaxiAct::North => next.taxi_row = row.saturating_sub(1),
            TaxiAct::East => {
                if can_move_east(row, col) {
                    next.taxi_col = col + 1;
                }
            }
            TaxiAct::West => {
                if can_move_west(row, col) {
                    next.taxi_col = col - 1;
                }
            }
            TaxiAct::Pickup => {
                if self.pass_loc < IN_TAXI && self.taxi_loc() == LOCS[self.pass_loc] {
                    next.pass_loc = IN_TAXI;
                } else {
                    reward = REWARD_ILLEGAL;
                }
            }
            TaxiAct::Dropoff => {
                let here = loc_index(row, col);
                if self.pass_loc == IN_TAXI && here == Some(self.dest) {
                    next.pass_loc = self.dest;
                    terminated = true;
                    reward = REWARD_DELIVERY;
                } else if let (IN_TAXI, Some(ix)) = (self.pass_loc, here) {
                    next.pass_loc = ix;
                } else {
                    reward = REWARD_ILLEGAL;
                }
            }
        }

        (next, reward, terminated)
    }

    /// Actions that change the state, 1 for valid and 0 otherwise, indexed by action.
    pub fn action_mask(&self) -> [u8; 6] {
        let (row, col) = self.taxi_loc();
        let mut mask = [0u8; 6];
        mask[TaxiAct::South as usize] = (row + 1 < NUM_ROWS) as u8;
        mask[TaxiAct::North as usize] = (row > 0) as u8;
        mask[TaxiAct::East as usize] = can_move_east(row, col) as u8;
        mask[TaxiAct::West as usize] = can_move_west(row, col) as u8;
        mask[TaxiAct::Pickup as usize] =
            (self.pass_loc < IN_TAXI && self.taxi_loc() == LOCS[self.pass_loc]) as u8;
        mask[TaxiAct::Dropoff as usize] =
            (self.pass_loc == IN_TAXI && loc_index(row, col).is_some()) as u8;
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(taxi_row: usize, taxi_col: usize, pass_loc: usize, dest: usize) -> TaxiState {
        TaxiState {
            taxi_row,
            taxi_col,
            pass_loc,
            dest,
        }
    }

    #[test]
    fn encode_decode_is_a_bijection() {
        let mut seen = vec![false; NUM_STATES];
        for s in 0..NUM_STATES as u16 {
            let decoded = TaxiState::decode(s).unwrap();
            assert_eq!(decoded.encode(), s);
            seen[s as usize] = true;
        }
        assert!(seen.iter().all(|&b| b));
        assert_eq!(TaxiState::decode(NUM_STATES as u16), None);
        assert_eq!(state(3, 1, 2, 0).encode(), 328);
    }

    #[test]
    fn initial_states_are_uniform_over_valid_ones() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..30_000 {
            let s = TaxiState::sample_initial(&mut rng);
            assert!(s.is_initial());
            *counts.entry(s.encode()).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 300);
        assert!(counts.values().all(|&c| c > 40 && c < 200));
    }

    #[test]
    fn moves_respect_walls_and_borders() {
        let s = state(0, 1, 0, 1);
        assert_eq!(s.transition(TaxiAct::East).0, s);
        assert_eq!(s.transition(TaxiAct::North).0, s);
        assert_eq!(s.transition(TaxiAct::West).0, state(0, 0, 0, 1));
        assert_eq!(s.transition(TaxiAct::South).0, state(1, 1, 0, 1));

        let s = state(4, 4, 0, 1);
        assert_eq!(s.transition(TaxiAct::South).0, s);
        assert_eq!(s.transition(TaxiAct::East).0, s);
        assert_eq!(s.transition(TaxiAct::West).0, state(4, 3, 0, 1));

        for act in [TaxiAct::South, TaxiAct::North, TaxiAct::East, TaxiAct::West] {
            let (_, r, done) = s.transition(act);
            assert_eq!(r, REWARD_STEP);
            assert!(!done);
        }
    }

    #[test]
    fn pickup() {
        let (next, r, done) = state(4, 0, 2, 1).transition(TaxiAct::Pickup);
        assert_eq!(next.pass_loc, IN_TAXI);
        assert_eq!(r, REWARD_STEP);
        assert!(!done);

        let (next, r, _) = state(4, 1, 2, 1).transition(TaxiAct::Pickup);
        assert_eq!(next.pass_loc, 2);
        assert_eq!(r, REWARD_ILLEGAL);

        let (next, r, _) = state(0, 0, IN_TAXI, 1).transition(TaxiAct::Pickup);
        assert_eq!(next.pass_loc, IN_TAXI);
        assert_eq!(r, REWARD_ILLEGAL);
    }

    #[test]
    fn dropoff() {
        let (next, r, done) = state(0, 4, IN_TAXI, 1).transition(TaxiAct::Dropoff);
        assert_eq!(next.pass_loc, 1);
        assert_eq!(r, REWARD_DELIVERY);
        assert!(done);

        // at another landmark the passenger steps out without penalty
        let (next, r, done) = state(4, 3, IN_TAXI, 1).transition(TaxiAct::Dropoff);
        assert_eq!(next.pass_loc, 3);
        assert_eq!(r, REWARD_STEP);
        assert!(!done);

        let (next, r, done) = state(2, 2, IN_TAXI, 1).transition(TaxiAct::Dropoff);
        assert_eq!(next.pass_loc, IN_TAXI);
        assert_eq!(r, REWARD_ILLEGAL);
        assert!(!done);

        let (_, r, _) = state(0, 4, 0, 1).transition(TaxiAct::Dropoff);
        assert_eq!(r, REWARD_ILLEGAL);
    }

    #[test]
    fn action_masks() {
        assert_eq!(state(0, 0, 0, 1).action_mask(), [1, 0, 1, 0, 1, 0]);
        assert_eq!(state(2, 2, IN_TAXI, 1).action_mask(), [1, 1, 1, 1, 0, 0]);
        assert_eq!(state(4, 3, IN_TAXI, 0).action_mask(), [0, 1, 1, 0, 0, 1]);
        assert_eq!(state(0, 1, 2, 3).action_mask(), [1, 0, 0, 1, 0, 0]);
    }
}
