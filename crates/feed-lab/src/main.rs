mod config;

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use feed_sim::{FeedEntryFactory, FeedSimConfig};
use runtime::feed_task::{FeedTask, FeedTaskConfig};
use runtime::snapshot::DashboardSnapshot;
use runtime::ticker::TickCounterPair;
use runtime::ticker_task::TickerTask;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    let sim = sim_config_for(&config);

    let jitter_seed = wall_clock_seed();
    let factory = FeedEntryFactory::builtin();
    let initial_batch = factory.generate_batch(sim.initial_batch_len, config.seed_offset);

    let feed = FeedTask::spawn(
        factory,
        initial_batch,
        FeedTaskConfig::from_sim(&sim, jitter_seed),
    );
    let ticker = TickerTask::spawn(
        TickCounterPair::new(sim.initial_count, sim.initial_value),
        sim.ticker_interval_ms,
        jitter_seed + 1,
    );

    let mut updates = feed.subscribe();
    for _ in 0..config.run_ticks {
        updates.changed().await?;
        let transactions = updates.borrow_and_update().clone();
        let snapshot = DashboardSnapshot::new(transactions, ticker.snapshot());
        println!("{}", snapshot.to_json_line()?);
    }

    feed.stop();
    ticker.stop();
    Ok(())
}

fn sim_config_for(config: &config::Config) -> FeedSimConfig {
    FeedSimConfig {
        buffer_capacity: config.capacity,
        ticker_interval_ms: config.ticker_interval_ms,
        ..FeedSimConfig::default()
    }
}

fn wall_clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(1)
}
