//! Engine configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece randomizer seed (default: derived from the system time)
//! - `BLOCKFALL_TICK_MS`: gravity period in milliseconds (default: 1000)
//! - `BLOCKFALL_LOG_PATH`: append a JSON-lines event log to this file (default: off)
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_TICK_MS: &str = "BLOCKFALL_TICK_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(seed_from_time);

        let tick_ms = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
