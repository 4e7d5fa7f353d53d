use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Most recent momentum-line and signal-line values for one instrument.
///
/// The instrument is bullish when the momentum line sits above the signal
/// line. Both values are the last point of externally computed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumPair {
    pub line: f64,
    pub signal: f64,
}

impl MomentumPair {
    pub fn new(line: f64, signal: f64) -> Self {
        Self { line, signal }
    }

    pub fn is_finite(&self) -> bool {
        self.line.is_finite() && self.signal.is_finite()
    }
}

/// Trailing per-period volatility values, chronologically ordered with the
/// most recent value last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolatilityWindow {
    values: Vec<f64>,
}

impl VolatilityWindow {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent volatility value.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Arithmetic mean of the `lookback` most recent values.
    ///
    /// Returns `None` when fewer than `lookback` values are available, so a
    /// partial window is never averaged.
    pub fn trailing_mean(&self, lookback: usize) -> Option<f64> {
        if lookback == 0 || self.values.len() < lookback {
            return None;
        }
        let tail = &self.values[self.values.len() - lookback..];
        Some(tail.iter().sum::<f64>() / lookback as f64)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Indicator state for one instrument at one tick.
///
/// `None` fields mean the provider could not produce the series yet
/// (insufficient warm-up history), never that the value is zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstrumentIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<MomentumPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<VolatilityWindow>,
}

impl InstrumentIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_momentum(mut self, momentum: MomentumPair) -> Self {
        self.momentum = Some(momentum);
        self
    }

    pub fn with_volatility(mut self, volatility: VolatilityWindow) -> Self {
        self.volatility = Some(volatility);
        self
    }
}

/// Read-only snapshot handed to the engine once per tick.
///
/// A configured instrument missing from `instruments` is treated the same as
/// one whose indicator fields are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub timestamp: DateTime<Utc>,
    pub instruments: BTreeMap<String, InstrumentIndicators>,
}

impl IndicatorSnapshot {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            instruments: BTreeMap::new(),
        }
    }

    pub fn with_instrument(
        mut self,
        symbol: impl Into<String>,
        indicators: InstrumentIndicators,
    ) -> Self {
        self.instruments.insert(symbol.into(), indicators);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&InstrumentIndicators> {
        self.instruments.get(symbol)
    }
}
