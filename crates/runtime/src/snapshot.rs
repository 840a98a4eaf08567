use feed_sim::FeedEntry;
use serde::Serialize;

use crate::ticker::TickSnapshot;

/// Everything the display layer needs for one render: the rolling feed
/// (most recent first) plus the aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub transactions: Vec<FeedEntry>,
    pub total_count: u64,
    pub total_value: f64,
}

impl DashboardSnapshot {
    pub fn new(transactions: Vec<FeedEntry>, ticker: TickSnapshot) -> Self {
        Self {
            transactions,
            total_count: ticker.count,
            total_value: ticker.value,
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
