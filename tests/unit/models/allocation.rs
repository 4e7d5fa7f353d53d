//! Unit tests for allocation targets and regime labels

use voltrix::models::{AllocationTarget, Regime};

#[test]
fn fresh_target_is_empty() {
    let target = AllocationTarget::new();
    assert!(target.is_empty());
    assert_eq!(target.len(), 0);
    assert!(target.get("SPY").is_none());
}

#[test]
fn set_and_get_weight() {
    let mut target = AllocationTarget::new();
    target.set("SPY", 1.0);
    assert_eq!(target.get("SPY"), Some(1.0));
    assert!(target.contains("SPY"));
    assert_eq!(target.len(), 1);
}

#[test]
fn absent_instrument_is_not_zero() {
    let mut target = AllocationTarget::new();
    target.set("SPY", 0.0);
    assert_eq!(target.get("SPY"), Some(0.0));
    assert!(target.get("QQQ").is_none());
}

#[test]
fn iteration_order_is_deterministic() {
    let mut target = AllocationTarget::new();
    target.set("QQQ", 0.0);
    target.set("SPY", 1.0);
    target.set("IWM", 0.5);
    let symbols: Vec<&str> = target.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(symbols, vec!["IWM", "QQQ", "SPY"]);
}

#[test]
fn target_serializes_as_plain_map() {
    let mut target = AllocationTarget::new();
    target.set("SPY", 1.0);
    let json = serde_json::to_string(&target).unwrap();
    assert_eq!(json, r#"{"SPY":1.0}"#);
}

#[test]
fn regime_serializes_by_name() {
    let json = serde_json::to_string(&Regime::BullishAcceptableRisk).unwrap();
    assert_eq!(json, r#""BullishAcceptableRisk""#);
}
