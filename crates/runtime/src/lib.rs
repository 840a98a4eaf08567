pub mod buffer;
pub mod feed_task;
pub mod jitter;
pub mod logging;
pub mod snapshot;
pub mod ticker;
pub mod ticker_task;

pub use buffer::RollingFeed;
pub use feed_task::{FeedTask, FeedTaskConfig, FeedTaskHandle};
pub use jitter::DelayJitter;
pub use snapshot::DashboardSnapshot;
pub use ticker::{TickCounterPair, TickSnapshot};
pub use ticker_task::{TickerTask, TickerTaskHandle};
