use feed_sim::SeededSequence;

/// Seeded source of per-tick delays, uniform over an inclusive millisecond
/// window. The feed loop re-arms a one-shot sleep with a fresh draw after
/// every firing, so jitter compounds naturally instead of snapping back to
/// a fixed period.
#[derive(Debug, Clone)]
pub struct DelayJitter {
    sequence: SeededSequence,
    min_ms: u64,
    max_ms: u64,
}

impl DelayJitter {
    pub fn new(seed: i64, min_ms: u64, max_ms: u64) -> Self {
        assert!(min_ms <= max_ms, "delay window must not be inverted");

        Self {
            sequence: SeededSequence::new(seed),
            min_ms,
            max_ms,
        }
    }

    pub fn next_delay_ms(&mut self) -> u64 {
        let span = self.max_ms - self.min_ms + 1;
        self.min_ms + (self.sequence.next_unit() * span as f64) as u64
    }
}
