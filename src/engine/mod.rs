//! Allocation decision engine and its weight-policy seam.

pub mod decision;
pub mod error;
pub mod weighting;

pub use decision::{classify, AllocationEngine, AllocationStrategy, IndicatorReading};
pub use error::EngineError;
pub use weighting::{BinaryWeighting, InverseVolatilityWeighting, WeightPolicy};
