mod catalog;
mod config;
mod factory;
mod rng;

pub use catalog::{BrandCatalogEntry, CatalogError, Catalogs, AMOUNTS, BRANDS, CHANNELS};
pub use config::FeedSimConfig;
pub use factory::{FeedEntry, FeedEntryFactory, BATCH_SEED_BASE, BATCH_SPACING_MS};
pub use rng::SeededSequence;
