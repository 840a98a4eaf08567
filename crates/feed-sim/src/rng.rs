const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

/// Lehmer-style multiplicative congruential sequence. Two sequences built
/// from the same seed and advanced the same number of times emit identical
/// values, which is what makes batch generation replayable.
///
/// Seeds are reduced with `rem_euclid` into the modulus field, so any
/// integer is accepted. A seed congruent to 0 mod 2147483647 is degenerate:
/// the state never leaves zero and every draw returns the same value just
/// below zero. `pick_index` still lands on index 0 for such draws, so the
/// degenerate stream is boring rather than broken.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    state: i64,
}

impl SeededSequence {
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(MODULUS),
        }
    }

    /// Advances the state and returns a fraction in `[0, 1)` for every
    /// non-degenerate seed.
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Draws one value and floors it into `0..len`. `len` must be non-zero;
    /// catalog handles enforce that before any draw happens.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index requires a non-empty table");
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}
