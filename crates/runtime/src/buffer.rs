use feed_sim::FeedEntry;

/// Capacity-bounded, most-recent-first transaction feed. New entries go to
/// the front; anything beyond capacity falls off the tail.
#[derive(Debug, Clone)]
pub struct RollingFeed {
    entries: Vec<FeedEntry>,
    capacity: usize,
}

impl RollingFeed {
    /// Builds the feed from an initial batch. Batches arrive
    /// oldest-to-newest, so the order is flipped here to match the
    /// most-recent-first contract; a batch longer than `capacity` keeps
    /// only its newest entries.
    pub fn new(initial_batch: Vec<FeedEntry>, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");

        let mut entries: Vec<FeedEntry> = initial_batch.into_iter().rev().collect();
        entries.truncate(capacity);

        Self { entries, capacity }
    }

    /// Prepends one entry and evicts past capacity. Returns how many
    /// entries fell off the tail (0 or 1 in steady state).
    pub fn push(&mut self, entry: FeedEntry) -> usize {
        self.entries.insert(0, entry);
        let evicted = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        evicted
    }

    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
