//! Weight assignment policies.
//!
//! Classification and weight assignment are separate concerns: the engine
//! derives a [`Regime`] from the indicator reading, then delegates to a
//! [`WeightPolicy`] for the capital fraction. Policies must return weights
//! in [0, 1].

use crate::engine::decision::IndicatorReading;
use crate::models::Regime;

/// Maps a classified regime plus its indicator reading to an allocation
/// weight.
pub trait WeightPolicy: Send + Sync {
    fn weight(&self, regime: Regime, reading: &IndicatorReading) -> f64;
}

/// Default policy: full allocation in the bullish regime, flat in every
/// other regime, including neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryWeighting;

impl WeightPolicy for BinaryWeighting {
    fn weight(&self, regime: Regime, _reading: &IndicatorReading) -> f64 {
        match regime {
            Regime::BullishAcceptableRisk => 1.0,
            Regime::BearishOrHighRisk | Regime::Neutral => 0.0,
        }
    }
}

/// Continuous alternative: inside the bullish regime the allocation shrinks
/// as current volatility approaches its trailing average, bottoming out at
/// `floor`. Bearish and neutral regimes stay flat.
#[derive(Debug, Clone, Copy)]
pub struct InverseVolatilityWeighting {
    floor: f64,
}

impl Default for InverseVolatilityWeighting {
    fn default() -> Self {
        Self { floor: 0.25 }
    }
}

impl InverseVolatilityWeighting {
    pub fn new(floor: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&floor) {
            return Err(format!("floor must be within [0, 1], got: {}", floor));
        }
        Ok(Self { floor })
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }
}

impl WeightPolicy for InverseVolatilityWeighting {
    fn weight(&self, regime: Regime, reading: &IndicatorReading) -> f64 {
        if regime != Regime::BullishAcceptableRisk {
            return 0.0;
        }
        if reading.average_volatility <= 0.0 {
            // Degenerate window, nothing to scale by.
            return 1.0;
        }
        let calm = 1.0 - reading.current_volatility / reading.average_volatility;
        (self.floor + (1.0 - self.floor) * calm).clamp(self.floor, 1.0)
    }
}
