//! The allocation decision engine.
//!
//! One synchronous pass per tick: for each configured instrument, validate
//! the indicator reading, classify the regime, map it to a weight through
//! the configured policy. Instruments without a complete snapshot are
//! skipped with an informational diagnostic; the partial map is still
//! returned. The engine holds no state across ticks.

use crate::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::weighting::{BinaryWeighting, WeightPolicy};
use crate::models::{AllocationTarget, IndicatorSnapshot, InstrumentIndicators, MomentumPair, Regime};
use chrono::Duration;
use tracing::{debug, info};

/// Validated per-instrument view of one tick, extracted from the raw
/// snapshot before classification.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorReading {
    pub momentum: MomentumPair,
    pub current_volatility: f64,
    pub average_volatility: f64,
}

/// Classify the market regime from a validated reading.
///
/// The neutral regime only arises on an exact momentum tie with acceptable
/// volatility; every other combination resolves to one of the first two
/// arms.
pub fn classify(reading: &IndicatorReading) -> Regime {
    let bullish = reading.momentum.line > reading.momentum.signal;
    let bearish = reading.momentum.line < reading.momentum.signal;
    let elevated = reading.current_volatility > reading.average_volatility;

    if bullish && !elevated {
        Regime::BullishAcceptableRisk
    } else if bearish || elevated {
        Regime::BearishOrHighRisk
    } else {
        Regime::Neutral
    }
}

/// The contract the external scheduler drives the engine through.
pub trait AllocationStrategy {
    /// Instruments tracked by this engine, fixed at construction.
    fn configured_instruments(&self) -> &[String];

    /// Sampling cadence the indicator data must be pre-aligned to. A
    /// declaration for the scheduler and data provider, not enforced here.
    fn required_interval(&self) -> Duration;

    /// Produce the target allocation map for one tick.
    fn decide(&self, tick: &IndicatorSnapshot) -> Result<AllocationTarget, EngineError>;
}

pub struct AllocationEngine {
    config: EngineConfig,
    policy: Box<dyn WeightPolicy>,
}

impl AllocationEngine {
    /// Engine with the default binary weighting.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, Box::new(BinaryWeighting))
    }

    pub fn with_policy(config: EngineConfig, policy: Box<dyn WeightPolicy>) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract a validated reading, or `None` when the instrument lacks the
    /// history to be evaluated this tick.
    ///
    /// Present-but-invalid data is a provider contract violation and fails
    /// the tick instead of defaulting.
    fn read_instrument(
        &self,
        symbol: &str,
        indicators: &InstrumentIndicators,
    ) -> Result<Option<IndicatorReading>, EngineError> {
        let (Some(momentum), Some(window)) = (indicators.momentum, &indicators.volatility) else {
            return Ok(None);
        };

        if !momentum.is_finite() {
            return Err(EngineError::malformed(symbol, "non-finite momentum values"));
        }
        let Some(current_volatility) = window.latest() else {
            return Err(EngineError::malformed(symbol, "empty volatility window"));
        };
        if window.values().iter().any(|v| !v.is_finite()) {
            return Err(EngineError::malformed(
                symbol,
                "non-finite volatility values",
            ));
        }

        let lookback = self.config.volatility_lookback;
        let Some(average_volatility) = window.trailing_mean(lookback) else {
            debug!(
                symbol = %symbol,
                have = window.len(),
                need = lookback,
                "volatility window shorter than lookback for {}",
                symbol
            );
            return Ok(None);
        };

        Ok(Some(IndicatorReading {
            momentum,
            current_volatility,
            average_volatility,
        }))
    }
}

impl AllocationStrategy for AllocationEngine {
    fn configured_instruments(&self) -> &[String] {
        &self.config.instruments
    }

    fn required_interval(&self) -> Duration {
        self.config.interval
    }

    fn decide(&self, tick: &IndicatorSnapshot) -> Result<AllocationTarget, EngineError> {
        let mut target = AllocationTarget::new();

        for symbol in &self.config.instruments {
            let reading = match tick.get(symbol) {
                Some(indicators) => self.read_instrument(symbol, indicators)?,
                None => None,
            };

            let Some(reading) = reading else {
                info!(symbol = %symbol, "Insufficient data for {}", symbol);
                continue;
            };

            let regime = classify(&reading);
            let weight = self.policy.weight(regime, &reading);
            debug!(
                symbol = %symbol,
                regime = ?regime,
                weight = weight,
                "classified {} as {:?}, target weight {:.2}",
                symbol,
                regime,
                weight
            );
            target.set(symbol.clone(), weight);
        }

        Ok(target)
    }
}
