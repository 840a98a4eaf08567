/// Calibration constants for the simulated dashboard. The initial totals
/// are a plausible daily baseline for the demo, not magic numbers to repeat
/// elsewhere; consumers read them from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedSimConfig {
    pub initial_batch_len: usize,
    pub buffer_capacity: usize,
    pub feed_delay_min_ms: u64,
    pub feed_delay_max_ms: u64,
    pub ticker_interval_ms: u64,
    pub count_step_min: u64,
    pub count_step_max: u64,
    pub value_step_min: f64,
    pub value_step_max: f64,
    pub initial_count: u64,
    pub initial_value: f64,
}

impl Default for FeedSimConfig {
    fn default() -> Self {
        Self {
            initial_batch_len: 20,
            buffer_capacity: 30,
            feed_delay_min_ms: 2_000,
            feed_delay_max_ms: 3_200,
            ticker_interval_ms: 1_500,
            count_step_min: 20,
            count_step_max: 47,
            value_step_min: 0.25,
            value_step_max: 0.60,
            initial_count: 2_340_412,
            initial_value: 27_126_844.0,
        }
    }
}
