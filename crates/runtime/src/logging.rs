#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLogEventKind {
    InitialBatchSeeded,
    LiveEntryAppended,
    OldestEvicted,
    CountersAdvanced,
    IntervalRescheduled,
    TaskStopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLogEvent {
    pub tick: u64,
    pub kind: RunLogEventKind,
}

impl RunLogEvent {
    pub fn new(tick: u64, kind: RunLogEventKind) -> Self {
        Self { tick, kind }
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

/// Discards every event; the default journal for callers that do not care.
#[derive(Debug, Default)]
pub struct NullRunLogWriter;

impl RunLogWriter for NullRunLogWriter {
    fn write(&mut self, _event: RunLogEvent) {}
}

/// Lets a task journal into a writer the caller keeps a handle on.
impl<W: RunLogWriter> RunLogWriter for std::sync::Arc<std::sync::Mutex<W>> {
    fn write(&mut self, event: RunLogEvent) {
        if let Ok(mut writer) = self.lock() {
            writer.write(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{InMemoryRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};

    #[test]
    fn in_memory_writer_keeps_events_in_order() {
        let mut writer = InMemoryRunLogWriter::new();

        writer.write(RunLogEvent::new(1, RunLogEventKind::LiveEntryAppended));
        writer.write(RunLogEvent::new(2, RunLogEventKind::OldestEvicted));

        assert_eq!(writer.events().len(), 2);
        assert_eq!(writer.events()[0].tick, 1);
        assert_eq!(writer.events()[1].kind, RunLogEventKind::OldestEvicted);
    }

    #[test]
    fn shared_writer_forwards_through_the_mutex() {
        let shared = Arc::new(Mutex::new(InMemoryRunLogWriter::new()));
        let mut journal = Arc::clone(&shared);

        journal.write(RunLogEvent::new(5, RunLogEventKind::CountersAdvanced));

        let events = shared.lock().unwrap();
        assert_eq!(events.events().len(), 1);
        assert_eq!(events.events()[0].tick, 5);
    }
}
