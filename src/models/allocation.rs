use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transient per-tick market regime for one instrument.
///
/// Derived fresh from the indicator snapshot and immediately mapped to a
/// weight; never persisted across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Regime {
    /// Momentum line above signal line with volatility at or below its
    /// trailing average.
    BullishAcceptableRisk,
    /// Momentum line below signal line, or volatility above its trailing
    /// average.
    BearishOrHighRisk,
    /// Momentum lines exactly tied while volatility remains acceptable.
    Neutral,
}

/// Target portfolio allocation for one tick: instrument symbol to a capital
/// fraction in [0, 1].
///
/// An instrument absent from the map was skipped for the tick and means
/// "no change requested", not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationTarget {
    weights: BTreeMap<String, f64>,
}

impl AllocationTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, symbol: impl Into<String>, weight: f64) {
        self.weights.insert(symbol.into(), weight);
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.weights.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.weights.iter()
    }
}
