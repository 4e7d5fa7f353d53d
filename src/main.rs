use chrono::Utc;
use dotenvy::dotenv;
use tracing::info;
use voltrix::config::EngineConfig;
use voltrix::engine::{AllocationEngine, AllocationStrategy};
use voltrix::models::{
    AllocationTarget, IndicatorSnapshot, InstrumentIndicators, MomentumPair, VolatilityWindow,
};
use voltrix::providers::{IndicatorProvider, StaticProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    voltrix::logging::init_logging();

    let config = EngineConfig::from_env();
    info!(
        instruments = ?config.instruments,
        interval_secs = config.interval.num_seconds(),
        "starting voltrix demo for {} instrument(s)",
        config.instruments.len()
    );
    let engine = AllocationEngine::new(config.clone());
    let symbol = config
        .instruments
        .first()
        .cloned()
        .unwrap_or_else(|| "SPY".to_string());

    // Momentum up, volatility at the calm end of its trailing range.
    let bullish = snapshot(&symbol, MomentumPair::new(1.5, 1.0), trailing_window(3.0, 2.0));
    run_tick(&engine, "bullish / acceptable risk", &bullish)?;

    // Momentum rolled over while volatility stayed calm.
    let bearish = snapshot(&symbol, MomentumPair::new(1.0, 1.5), trailing_window(3.0, 1.0));
    run_tick(&engine, "bearish momentum", &bearish)?;

    // Momentum still up, but the latest volatility spike overrides it.
    let spiked = snapshot(&symbol, MomentumPair::new(1.5, 1.0), trailing_window(3.0, 7.0));
    run_tick(&engine, "volatility spike", &spiked)?;

    Ok(())
}

fn run_tick(
    engine: &AllocationEngine,
    label: &str,
    tick: &IndicatorSnapshot,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = StaticProvider::new(tick.clone());
    let target = engine.decide(&provider.snapshot()?)?;
    print_target(label, &target);
    Ok(())
}

fn print_target(label: &str, target: &AllocationTarget) {
    println!("Tick: {}", label);
    for (symbol, weight) in target.iter() {
        println!("  {} -> {:.2}", symbol, weight);
    }
    if target.is_empty() {
        println!("  (no allocations emitted)");
    }
    match serde_json::to_string(target) {
        Ok(json) => println!("  json: {}", json),
        Err(e) => println!("  json serialization failed: {}", e),
    }
    println!();
}

fn snapshot(
    symbol: &str,
    momentum: MomentumPair,
    volatility: VolatilityWindow,
) -> IndicatorSnapshot {
    IndicatorSnapshot::new(Utc::now()).with_instrument(
        symbol,
        InstrumentIndicators::new()
            .with_momentum(momentum)
            .with_volatility(volatility),
    )
}

/// 14 periods at `base`, with the most recent value replaced by `latest`.
fn trailing_window(base: f64, latest: f64) -> VolatilityWindow {
    let mut values = vec![base; 14];
    values[13] = latest;
    VolatilityWindow::new(values)
}
