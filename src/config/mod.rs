//! Process-lifetime engine configuration.
//!
//! Built once at startup from defaults or environment variables and never
//! mutated afterwards. The momentum lookbacks are declarations consumed by
//! the upstream indicator provider; the engine itself only uses the
//! instrument list, the volatility lookback, and the interval.

use chrono::Duration;
use std::env;

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("VOLTRIX_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Tracked instrument symbols. May be empty, which yields an empty
    /// allocation map every tick.
    pub instruments: Vec<String>,
    /// Fast lookback of the momentum indicator pair.
    pub momentum_fast: u32,
    /// Slow lookback of the momentum indicator pair.
    pub momentum_slow: u32,
    /// Trailing window length for the volatility average.
    pub volatility_lookback: usize,
    /// Sampling cadence the indicator data must be aligned to.
    pub interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            instruments: vec!["SPY".to_string()],
            momentum_fast: 12,
            momentum_slow: 26,
            volatility_lookback: 14,
            interval: Duration::days(1),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let instruments = env::var("VOLTRIX_INSTRUMENTS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|parsed| !parsed.is_empty())
            .unwrap_or(defaults.instruments);

        let momentum_fast = env::var("VOLTRIX_MACD_FAST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.momentum_fast);

        let momentum_slow = env::var("VOLTRIX_MACD_SLOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.momentum_slow);

        let volatility_lookback = env::var("VOLTRIX_VOLATILITY_LOOKBACK")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.volatility_lookback);

        let interval = env::var("VOLTRIX_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::seconds)
            .unwrap_or(defaults.interval);

        Self {
            instruments,
            momentum_fast,
            momentum_slow,
            volatility_lookback,
            interval,
        }
    }

    pub fn with_instruments(mut self, instruments: Vec<String>) -> Self {
        self.instruments = instruments;
        self
    }
}
