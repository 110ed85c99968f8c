//! Environment knobs for the widget test suites.
//!
//! - `MINIMALIST_PARSE_SEED`: seed for generated parser inputs (decimal or `0x` hex)
//! - `MINIMALIST_PARSE_RUNS`: number of generated inputs
//! - `MINIMALIST_SCENARIO_FILTER`: substring a scenario id must contain to run

use std::env;

pub const PARSE_SEED: &str = "MINIMALIST_PARSE_SEED";
pub const PARSE_RUNS: &str = "MINIMALIST_PARSE_RUNS";
pub const SCENARIO_FILTER: &str = "MINIMALIST_SCENARIO_FILTER";

pub fn parse_u64(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => trimmed.parse::<u64>().ok(),
    }
}

pub fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_u64(&raw)
            .unwrap_or_else(|| panic!("unsupported {key} value '{raw}'; use a decimal or 0x-hex integer")),
        _ => default,
    }
}

pub fn parse_seed() -> u64 {
    env_u64(PARSE_SEED, 0x5EED_CAFE)
}

/// Generated input count. CI always runs at least one.
pub fn parse_runs() -> usize {
    let runs = env_u64(PARSE_RUNS, 512) as usize;
    if env::var("CI").is_ok() { runs.max(1) } else { runs }
}

#[derive(Clone, Debug, Default)]
pub struct ScenarioFilter {
    needle: Option<String>,
}

impl ScenarioFilter {
    pub fn from_env() -> Self {
        let needle = env::var(SCENARIO_FILTER)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self { needle }
    }

    pub fn matches(&self, id: &str) -> bool {
        self.needle.as_deref().is_none_or(|needle| id.contains(needle))
    }
}
