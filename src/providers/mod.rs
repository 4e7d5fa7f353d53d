//! Indicator provider interface for upstream data source integration.
//!
//! The provider owns indicator computation and interval alignment; the
//! engine only consumes snapshots. Per configured instrument a snapshot
//! carries the momentum pair and a volatility window of at least the
//! configured lookback, or absent fields while warm-up history is still
//! accumulating.

use crate::models::IndicatorSnapshot;

pub trait IndicatorProvider {
    /// Produce the indicator snapshot for the current tick.
    fn snapshot(&self) -> Result<IndicatorSnapshot, Box<dyn std::error::Error>>;
}

/// Provider serving a prepared snapshot, for demos and tests.
pub struct StaticProvider {
    snapshot: IndicatorSnapshot,
}

impl StaticProvider {
    pub fn new(snapshot: IndicatorSnapshot) -> Self {
        Self { snapshot }
    }
}

impl IndicatorProvider for StaticProvider {
    fn snapshot(&self) -> Result<IndicatorSnapshot, Box<dyn std::error::Error>> {
        Ok(self.snapshot.clone())
    }
}
