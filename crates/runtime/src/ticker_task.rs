use std::time::Duration;

use feed_sim::SeededSequence;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::logging::{NullRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};
use crate::ticker::{TickCounterPair, TickSnapshot};

/// Owner handle for a running counter loop. Each instance owns its own
/// counter pair, timer and channels; independent handles share nothing.
#[derive(Debug)]
pub struct TickerTaskHandle {
    snapshots: watch::Receiver<TickSnapshot>,
    interval_ms: watch::Sender<u64>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TickerTaskHandle {
    pub fn subscribe(&self) -> watch::Receiver<TickSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> TickSnapshot {
        *self.snapshots.borrow()
    }

    /// Re-arms with the new period on the next scheduling cycle; the tick
    /// currently in flight keeps its old deadline and no extra tick fires.
    pub fn set_interval_ms(&self, interval_ms: u64) {
        assert!(interval_ms > 0, "interval must be non-zero");
        let _ = self.interval_ms.send(interval_ms);
    }

    /// Cooperative cancellation; idempotent.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Fixed-rate driver for a [`TickCounterPair`]: sleep the configured
/// interval, advance the pair, publish a snapshot, re-arm.
pub struct TickerTask;

impl TickerTask {
    pub fn spawn(pair: TickCounterPair, interval_ms: u64, step_seed: i64) -> TickerTaskHandle {
        Self::spawn_with_log(pair, interval_ms, step_seed, Box::new(NullRunLogWriter))
    }

    pub fn spawn_with_log(
        mut pair: TickCounterPair,
        interval_ms: u64,
        step_seed: i64,
        mut log: Box<dyn RunLogWriter + Send>,
    ) -> TickerTaskHandle {
        assert!(interval_ms > 0, "interval must be non-zero");

        let mut sequence = SeededSequence::new(step_seed);
        let (snapshot_tx, snapshot_rx) = watch::channel(pair.snapshot());
        let (interval_tx, interval_rx) = watch::channel(interval_ms);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut tick: u64 = 0;
            let mut armed_ms = *interval_rx.borrow();
            loop {
                let current_ms = *interval_rx.borrow();
                if current_ms != armed_ms {
                    armed_ms = current_ms;
                    log.write(RunLogEvent::new(tick, RunLogEventKind::IntervalRescheduled));
                }

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
                    _ = tokio::time::sleep(Duration::from_millis(armed_ms)) => {
                        tick += 1;
                        pair.advance(&mut sequence);
                        log.write(RunLogEvent::new(tick, RunLogEventKind::CountersAdvanced));
                        let _ = snapshot_tx.send(pair.snapshot());
                    }
                }
            }
        });

        TickerTaskHandle {
            snapshots: snapshot_rx,
            interval_ms: interval_tx,
            shutdown: shutdown_tx,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::logging::{InMemoryRunLogWriter, RunLogEventKind};
    use crate::ticker::TickCounterPair;

    use super::{TickerTask, TickerTaskHandle};

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn spawn_default() -> TickerTaskHandle {
        TickerTask::spawn(TickCounterPair::new(0, 0.0), 1_500, 21)
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn one_fixed_rate_tick_lands_in_the_step_ranges() {
        let handle = spawn_default();
        settle().await;

        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;

        let snapshot = handle.snapshot();
        assert!((20..=47).contains(&snapshot.count));
        assert!((0.25..=0.60).contains(&snapshot.value));
        handle.stop();
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn no_tick_fires_before_the_interval_elapses() {
        let handle = spawn_default();
        settle().await;

        tokio::time::advance(Duration::from_millis(1_499)).await;
        settle().await;

        assert_eq!(handle.snapshot().count, 0);
        handle.stop();
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn totals_grow_monotonically_across_ticks() {
        let handle = spawn_default();
        settle().await;

        let mut previous = handle.snapshot();
        for _ in 0..10 {
            tokio::time::advance(Duration::from_millis(1_500)).await;
            settle().await;

            let current = handle.snapshot();
            assert!(current.count > previous.count);
            assert!(current.value > previous.value);
            previous = current;
        }

        handle.stop();
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn reschedule_applies_on_the_next_cycle_without_extra_ticks() {
        let handle = spawn_default();
        settle().await;

        // Re-arm request lands while the first 1500ms sleep is in flight.
        handle.set_interval_ms(500);
        settle().await;

        tokio::time::advance(Duration::from_millis(1_499)).await;
        settle().await;
        assert_eq!(handle.snapshot().count, 0, "old deadline must hold");

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        let after_first = handle.snapshot().count;
        assert!(after_first > 0);

        // From here on the shorter period is in effect.
        tokio::time::advance(Duration::from_millis(500)).await;
        settle().await;
        assert!(handle.snapshot().count > after_first);

        handle.stop();
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn stop_halts_mutation_for_good() {
        let handle = spawn_default();
        settle().await;

        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;

        handle.stop();
        settle().await;
        assert!(handle.is_finished());

        let before = handle.snapshot();
        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;

        assert_eq!(handle.snapshot(), before);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn stop_wins_even_when_a_deadline_has_already_elapsed() {
        let handle = spawn_default();
        settle().await;

        // The tick deadline lapses while consumer code is still running;
        // stop lands before the loop gets polled again.
        tokio::time::advance(Duration::from_millis(1_500)).await;
        handle.stop();

        let before = handle.snapshot();
        settle().await;

        assert_eq!(handle.snapshot(), before);
        assert!(handle.is_finished());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn independent_instances_do_not_share_state() {
        let fast = TickerTask::spawn(TickCounterPair::new(0, 0.0), 500, 1);
        let slow = TickerTask::spawn(TickCounterPair::new(0, 0.0), 5_000, 2);
        settle().await;

        tokio::time::advance(Duration::from_millis(500)).await;
        settle().await;

        assert!(fast.snapshot().count > 0);
        assert_eq!(slow.snapshot().count, 0);

        fast.stop();
        slow.stop();
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn journal_records_ticks_reschedules_and_shutdown() {
        let journal = Arc::new(Mutex::new(InMemoryRunLogWriter::new()));
        let handle = TickerTask::spawn_with_log(
            TickCounterPair::new(0, 0.0),
            1_500,
            21,
            Box::new(Arc::clone(&journal)),
        );
        settle().await;

        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;
        handle.set_interval_ms(800);
        tokio::time::advance(Duration::from_millis(1_500)).await;
        settle().await;
        handle.stop();
        settle().await;

        let events = journal.lock().unwrap().events().to_vec();
        let kinds: Vec<RunLogEventKind> = events.iter().map(|event| event.kind).collect();
        assert!(kinds.contains(&RunLogEventKind::CountersAdvanced));
        assert!(kinds.contains(&RunLogEventKind::IntervalRescheduled));
        assert_eq!(kinds.last(), Some(&RunLogEventKind::TaskStopped));
    }

    #[test]
    #[should_panic(expected = "interval must be non-zero")]
    fn zero_interval_is_rejected_at_spawn() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime should build");
        let _guard = runtime.enter();
        let _ = TickerTask::spawn(TickCounterPair::new(0, 0.0), 0, 1);
    }
}
