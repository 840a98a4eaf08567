use std::time::Duration;

use feed_sim::{FeedEntry, FeedEntryFactory, FeedSimConfig};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::buffer::RollingFeed;
use crate::jitter::DelayJitter;
use crate::logging::{NullRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};

#[derive(Debug, Clone, Copy)]
pub struct FeedTaskConfig {
    pub capacity: usize,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub jitter_seed: i64,
}

impl FeedTaskConfig {
    pub fn from_sim(config: &FeedSimConfig, jitter_seed: i64) -> Self {
        Self {
            capacity: config.buffer_capacity,
            delay_min_ms: config.feed_delay_min_ms,
            delay_max_ms: config.feed_delay_max_ms,
            jitter_seed,
        }
    }
}

/// Owner handle for a running feed loop. Dropping the handle (or calling
/// `stop`) ends the loop; no tick fires afterwards.
#[derive(Debug)]
pub struct FeedTaskHandle {
    snapshots: watch::Receiver<Vec<FeedEntry>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl FeedTaskHandle {
    /// Fresh receiver for the most-recent-first snapshot of the feed.
    pub fn subscribe(&self) -> watch::Receiver<Vec<FeedEntry>> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> Vec<FeedEntry> {
        self.snapshots.borrow().clone()
    }

    /// Cooperative cancellation; idempotent.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Timer-driven producer feeding a [`RollingFeed`]: sleep a jittered delay,
/// generate one live entry, prepend, publish, re-arm. A one-shot sleep is
/// re-armed after each firing rather than running a fixed-rate interval, so
/// there are no catch-up bursts if the consumer stalls.
pub struct FeedTask;

impl FeedTask {
    pub fn spawn(
        factory: FeedEntryFactory,
        initial_batch: Vec<FeedEntry>,
        config: FeedTaskConfig,
    ) -> FeedTaskHandle {
        Self::spawn_with_log(factory, initial_batch, config, Box::new(NullRunLogWriter))
    }

    pub fn spawn_with_log(
        mut factory: FeedEntryFactory,
        initial_batch: Vec<FeedEntry>,
        config: FeedTaskConfig,
        mut log: Box<dyn RunLogWriter + Send>,
    ) -> FeedTaskHandle {
        let mut feed = RollingFeed::new(initial_batch, config.capacity);
        let mut jitter =
            DelayJitter::new(config.jitter_seed, config.delay_min_ms, config.delay_max_ms);

        let (snapshot_tx, snapshot_rx) = watch::channel(feed.entries().to_vec());
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        log.write(RunLogEvent::new(0, RunLogEventKind::InitialBatchSeeded));

        let task = tokio::spawn(async move {
            let mut tick: u64 = 0;
            loop {
                let delay = Duration::from_millis(jitter.next_delay_ms());
                // Shutdown must win over an already-elapsed deadline, so the
                // cancellation branch is polled first.
                tokio::select! {
                    biased;
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            log.write(RunLogEvent::new(tick, RunLogEventKind::TaskStopped));
                            break;
                        }
                    }
                    _ = tokio::time::sleep(delay) => {
                        tick += 1;
                        let entry = factory.generate_one();
                        let evicted = feed.push(entry);

                        log.write(RunLogEvent::new(tick, RunLogEventKind::LiveEntryAppended));
                        if evicted > 0 {
                            log.write(RunLogEvent::new(tick, RunLogEventKind::OldestEvicted));
                        }

                        let _ = snapshot_tx.send(feed.entries().to_vec());
                    }
                }
            }
        });

        FeedTaskHandle {
            snapshots: snapshot_rx,
            shutdown: shutdown_tx,
            task,
        }
    }
}
