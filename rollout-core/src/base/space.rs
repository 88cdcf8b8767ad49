//! Discrete action space.
use std::fmt;

/// A space of `n` integers `{start, ..., start + n - 1}`.
///
/// Sampling uses its own seedable random generator, so runs built with the same
/// seed draw the same actions.
pub struct Discrete {
    n: usize,
    start: i64,
    rng: fastrand::Rng,
}

impl Discrete {
    /// Constructs a space of `n` integers starting from zero.
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        Self::with_start(n, 0)
    }

    /// Constructs a space of `n` integers starting from `start`.
    ///
    /// Panics if `n == 0`.
    pub fn with_start(n: usize, start: i64) -> Self {
        assert!(n > 0, "a discrete space must have at least one element");
        Self {
            n,
            start,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reseeds the random generator used for sampling.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Returns `true` if `x` is an element of the space.
    pub fn contains(&self, x: i64) -> bool {
        x >= self.start && x < self.start + self.n as i64
    }

    /// Draws an element uniformly at random.
    pub fn sample(&mut self) -> i64 {
        self.start + self.rng.usize(..self.n) as i64
    }

    /// Draws an element uniformly among those with `mask[i] == 1`.
    ///
    /// `mask` must have `n` entries. If no entry is set, `start` is returned.
    pub fn sample_masked(&mut self, mask: &[u8]) -> i64 {
        debug_assert_eq!(mask.len(), self.n);
        let valid = mask
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == 1)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        if valid.is_empty() {
            self.start
        } else {
            self.start + valid[self.rng.usize(..valid.len())] as i64
        }
    }
}

impl fmt::Debug for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == 0 {
            write!(f, "Discrete({})", self.n)
        } else {
            write!(f, "Discrete({}, start={})", self.n, self.start)
        }
    }
}
