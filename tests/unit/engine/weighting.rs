//! Unit tests for weight policies

use voltrix::engine::{
    BinaryWeighting, IndicatorReading, InverseVolatilityWeighting, WeightPolicy,
};
use voltrix::models::{MomentumPair, Regime};

fn reading(current: f64, average: f64) -> IndicatorReading {
    IndicatorReading {
        momentum: MomentumPair::new(1.5, 1.0),
        current_volatility: current,
        average_volatility: average,
    }
}

#[test]
fn binary_full_allocation_when_bullish() {
    let policy = BinaryWeighting;
    assert_eq!(
        policy.weight(Regime::BullishAcceptableRisk, &reading(2.0, 3.0)),
        1.0
    );
}

#[test]
fn binary_flat_when_bearish_or_high_risk() {
    let policy = BinaryWeighting;
    assert_eq!(policy.weight(Regime::BearishOrHighRisk, &reading(4.0, 3.0)), 0.0);
}

#[test]
fn binary_flat_when_neutral() {
    let policy = BinaryWeighting;
    assert_eq!(policy.weight(Regime::Neutral, &reading(1.0, 3.0)), 0.0);
}

#[test]
fn inverse_volatility_floor_validation() {
    assert!(InverseVolatilityWeighting::new(0.0).is_ok());
    assert!(InverseVolatilityWeighting::new(1.0).is_ok());
    assert!(InverseVolatilityWeighting::new(-0.1).is_err());
    assert!(InverseVolatilityWeighting::new(1.5).is_err());
}

#[test]
fn inverse_volatility_default_floor() {
    let policy = InverseVolatilityWeighting::default();
    assert!((policy.floor() - 0.25).abs() < 1e-9);
}

#[test]
fn inverse_volatility_flat_outside_bullish_regime() {
    let policy = InverseVolatilityWeighting::default();
    assert_eq!(policy.weight(Regime::BearishOrHighRisk, &reading(4.0, 3.0)), 0.0);
    assert_eq!(policy.weight(Regime::Neutral, &reading(2.0, 3.0)), 0.0);
}

#[test]
fn inverse_volatility_shrinks_toward_floor() {
    let policy = InverseVolatilityWeighting::new(0.25).unwrap();

    // Calm markets keep close to full allocation.
    let calm = policy.weight(Regime::BullishAcceptableRisk, &reading(0.3, 3.0));
    // Volatility at its average bottoms out at the floor.
    let at_average = policy.weight(Regime::BullishAcceptableRisk, &reading(3.0, 3.0));

    assert!(calm > at_average);
    assert!((at_average - 0.25).abs() < 1e-9);
}

#[test]
fn inverse_volatility_stays_within_bounds() {
    let policy = InverseVolatilityWeighting::default();
    for current in [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
        let weight = policy.weight(Regime::BullishAcceptableRisk, &reading(current, 3.0));
        assert!(weight >= 0.0);
        assert!(weight <= 1.0);
    }
}

#[test]
fn inverse_volatility_degenerate_average() {
    let policy = InverseVolatilityWeighting::default();
    let weight = policy.weight(Regime::BullishAcceptableRisk, &reading(0.0, 0.0));
    assert_eq!(weight, 1.0);
}
