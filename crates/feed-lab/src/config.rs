use std::{env, fmt};

const DEFAULT_CAPACITY: usize = 30;
const DEFAULT_TICKER_INTERVAL_MS: u64 = 1_500;
const DEFAULT_RUN_TICKS: u64 = 10;
const DEFAULT_SEED_OFFSET: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    pub ticker_interval_ms: u64,
    pub run_ticks: u64,
    pub seed_offset: i64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity,
    InvalidTickerIntervalMs,
    InvalidRunTicks,
    InvalidSeedOffset,
    NonUnicodeCapacity,
    NonUnicodeTickerIntervalMs,
    NonUnicodeRunTicks,
    NonUnicodeSeedOffset,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => {
                write!(f, "FEED_LAB_CAPACITY must be a positive integer")
            }
            Self::InvalidTickerIntervalMs => {
                write!(f, "FEED_LAB_TICKER_INTERVAL_MS must be a positive integer")
            }
            Self::InvalidRunTicks => {
                write!(f, "FEED_LAB_RUN_TICKS must be a positive integer")
            }
            Self::InvalidSeedOffset => {
                write!(f, "FEED_LAB_SEED_OFFSET must be an integer")
            }
            Self::NonUnicodeCapacity => {
                write!(f, "FEED_LAB_CAPACITY contains non-unicode data")
            }
            Self::NonUnicodeTickerIntervalMs => {
                write!(f, "FEED_LAB_TICKER_INTERVAL_MS contains non-unicode data")
            }
            Self::NonUnicodeRunTicks => {
                write!(f, "FEED_LAB_RUN_TICKS contains non-unicode data")
            }
            Self::NonUnicodeSeedOffset => {
                write!(f, "FEED_LAB_SEED_OFFSET contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let capacity = parse_positive_u64_env(
            "FEED_LAB_CAPACITY",
            DEFAULT_CAPACITY as u64,
            ConfigError::InvalidCapacity,
            ConfigError::NonUnicodeCapacity,
        )? as usize;

        let ticker_interval_ms = parse_positive_u64_env(
            "FEED_LAB_TICKER_INTERVAL_MS",
            DEFAULT_TICKER_INTERVAL_MS,
            ConfigError::InvalidTickerIntervalMs,
            ConfigError::NonUnicodeTickerIntervalMs,
        )?;

        let run_ticks = parse_positive_u64_env(
            "FEED_LAB_RUN_TICKS",
            DEFAULT_RUN_TICKS,
            ConfigError::InvalidRunTicks,
            ConfigError::NonUnicodeRunTicks,
        )?;

        let seed_offset = match env::var("FEED_LAB_SEED_OFFSET") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidSeedOffset)?,
            Err(env::VarError::NotPresent) => DEFAULT_SEED_OFFSET,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeSeedOffset);
            }
        };

        Ok(Self {
            capacity,
            ticker_interval_ms,
            run_ticks,
            seed_offset,
        })
    }
}

fn parse_positive_u64_env(
    key: &str,
    default_value: u64,
    invalid_error: ConfigError,
    non_unicode_error: ConfigError,
) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = match value.parse::<u64>() {
                Ok(parsed) => parsed,
                Err(_) => return Err(invalid_error),
            };
            if parsed == 0 {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(non_unicode_error),
    }
}
