use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::rng::SeededSequence;

pub const BATCH_SEED_BASE: i64 = 42;
pub const BATCH_SPACING_MS: i64 = 2_800;

const LIVE_SEED_STRIDE: i64 = 137;
const LIVE_CLOCK_MODULUS: i64 = 9_999;

/// One simulated transaction. Every field except `id` and `timestamp_ms`
/// is drawn from the fixed catalogs, never synthesized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub id: String,
    pub brand: String,
    pub category: String,
    pub color_hex: String,
    pub initial: char,
    pub amount: f64,
    pub channel: String,
    pub timestamp_ms: i64,
}

/// Produces feed entries in two modes.
///
/// Batch mode is fully replayable: the sequence is seeded from
/// `BATCH_SEED_BASE + seed_offset` and each entry consumes exactly three
/// draws (brand, amount, channel), so identical inputs give identical
/// entries. Live mode seeds a fresh sequence from a per-factory serial plus
/// the wall clock; it is internally consistent but deliberately not
/// reproducible across runs.
///
/// The live serial is instance state rather than a process-wide global, so
/// independent factories (and independent tests) cannot pollute each other.
#[derive(Debug)]
pub struct FeedEntryFactory {
    catalogs: Catalogs,
    live_serial: u64,
}

impl FeedEntryFactory {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs,
            live_serial: 0,
        }
    }

    pub fn builtin() -> Self {
        Self::new(Catalogs::builtin())
    }

    pub fn generate_batch(&self, count: usize, seed_offset: i64) -> Vec<FeedEntry> {
        self.generate_batch_at(count, seed_offset, wall_clock_ms())
    }

    /// Batch generation with a pinned clock. Timestamps ascend in fixed
    /// 2.8s steps and end one step before `now_ms`, so the batch renders
    /// oldest-to-newest.
    pub fn generate_batch_at(&self, count: usize, seed_offset: i64, now_ms: i64) -> Vec<FeedEntry> {
        let mut sequence = SeededSequence::new(BATCH_SEED_BASE + seed_offset);

        (0..count)
            .map(|i| {
                let timestamp_ms = now_ms - ((count - i) as i64) * BATCH_SPACING_MS;
                self.draw_entry(
                    &mut sequence,
                    format!("feed-{seed_offset}-{i}"),
                    timestamp_ms,
                )
            })
            .collect()
    }

    pub fn generate_one(&mut self) -> FeedEntry {
        self.generate_one_at(wall_clock_ms())
    }

    pub fn generate_one_at(&mut self, now_ms: i64) -> FeedEntry {
        self.live_serial += 1;
        let seed =
            self.live_serial as i64 * LIVE_SEED_STRIDE + now_ms.rem_euclid(LIVE_CLOCK_MODULUS);
        let mut sequence = SeededSequence::new(seed);

        self.draw_entry(
            &mut sequence,
            format!("feed-live-{}", self.live_serial),
            now_ms,
        )
    }

    /// Number of live entries produced so far; strictly increasing.
    pub fn live_serial(&self) -> u64 {
        self.live_serial
    }

    fn draw_entry(
        &self,
        sequence: &mut SeededSequence,
        id: String,
        timestamp_ms: i64,
    ) -> FeedEntry {
        let brands = self.catalogs.brands();
        let amounts = self.catalogs.amounts();
        let channels = self.catalogs.channels();

        let brand = brands[sequence.pick_index(brands.len())];
        let amount = amounts[sequence.pick_index(amounts.len())];
        let channel = channels[sequence.pick_index(channels.len())];

        FeedEntry {
            id,
            brand: brand.name.to_string(),
            category: brand.category.to_string(),
            color_hex: brand.color_hex.to_string(),
            initial: brand.initial,
            amount,
            channel: channel.to_string(),
            timestamp_ms,
        }
    }
}

fn wall_clock_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
