//! Voltrix: a momentum- and volatility-driven allocation decision engine.
//!
//! Each tick the engine reads a snapshot of externally computed indicator
//! series per tracked instrument, classifies the market regime, and emits a
//! target allocation map for the downstream execution layer. The engine is
//! a pure function of the snapshot: no I/O, no carried position state, no
//! async runtime.

pub mod config;
pub mod engine;
pub mod logging;
pub mod models;
pub mod providers;
