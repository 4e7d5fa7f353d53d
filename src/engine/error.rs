use thiserror::Error;

/// Contract violations surfaced by the decision engine.
///
/// Insufficient indicator history is not an error; instruments without a
/// complete snapshot are skipped for the tick. `MalformedInput` covers data
/// that is present but of an invalid shape.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed indicator input for {symbol}: {detail}")]
    MalformedInput { symbol: String, detail: String },
}

impl EngineError {
    pub fn malformed(symbol: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            symbol: symbol.into(),
            detail: detail.into(),
        }
    }
}
