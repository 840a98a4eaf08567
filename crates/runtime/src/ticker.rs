use feed_sim::{FeedSimConfig, SeededSequence};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickSnapshot {
    pub count: u64,
    pub value: f64,
}

/// Two simulated aggregate totals that only ever go up. Each tick adds a
/// uniform integer to `count` and a uniform fraction to `value`, then
/// rounds `value` back to whole cents.
#[derive(Debug, Clone)]
pub struct TickCounterPair {
    count: u64,
    value: f64,
    count_step_min: u64,
    count_step_max: u64,
    value_step_min: f64,
    value_step_max: f64,
}

impl TickCounterPair {
    pub fn new(initial_count: u64, initial_value: f64) -> Self {
        let defaults = FeedSimConfig::default();
        Self::with_steps(
            initial_count,
            initial_value,
            defaults.count_step_min,
            defaults.count_step_max,
            defaults.value_step_min,
            defaults.value_step_max,
        )
    }

    pub fn with_steps(
        initial_count: u64,
        initial_value: f64,
        count_step_min: u64,
        count_step_max: u64,
        value_step_min: f64,
        value_step_max: f64,
    ) -> Self {
        assert!(
            count_step_min >= 1 && count_step_min <= count_step_max,
            "count step range must be positive and ordered"
        );
        assert!(
            value_step_min > 0.0 && value_step_min <= value_step_max,
            "value step range must be positive and ordered"
        );

        Self {
            count: initial_count,
            value: round_cents(initial_value),
            count_step_min,
            count_step_max,
            value_step_min,
            value_step_max,
        }
    }

    /// Applies one tick worth of growth, drawing two values from the
    /// sequence. Both totals strictly increase: the count step is at least
    /// 1 and the value step is large enough to survive cent rounding.
    pub fn advance(&mut self, sequence: &mut SeededSequence) {
        let count_span = self.count_step_max - self.count_step_min + 1;
        self.count += self.count_step_min + (sequence.next_unit() * count_span as f64) as u64;

        let value_delta = self.value_step_min
            + sequence.next_unit() * (self.value_step_max - self.value_step_min);
        self.value = round_cents(self.value + value_delta);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            count: self.count,
            value: self.value,
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
