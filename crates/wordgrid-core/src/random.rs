// Seeded linear congruential generator.
//
// The recurrence and its constants are fixed: saved worksheets are
// identified by their seed alone, and regenerating one must reproduce the
// same grid letter for letter. This is a reproducibility generator, not a
// statistically strong one.

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9301;

/// LCG increment.
pub const INCREMENT: u64 = 49297;

/// LCG modulus. Every output is `state / MODULUS`.
pub const MODULUS: u64 = 233280;

/// Deterministic pseudo-random stream derived from a single integer seed.
///
/// Each generation call constructs its own instance, so identical seeds
/// always replay identical sequences regardless of call history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Advance the state and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Draw an index in `[0, bound)` as `floor(next_f64() * bound)`.
    ///
    /// Returns 0 without advancing the stream when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // next_f64() < 1, so the product stays strictly below bound.
        (self.next_f64() * bound as f64).floor() as usize
    }

    /// Draw a fair coin: `true` when the next value is below one half.
    pub fn next_bool(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}
