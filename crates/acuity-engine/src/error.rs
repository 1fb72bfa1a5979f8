use thiserror::Error;

use acuity_scores::error::ScoreError;

/// Request-fatal failures of the engine.
///
/// Enrichment failures are absent on purpose: the pipeline recovers them
/// in place and they never reach the caller as errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request named a score id outside the registry.
    #[error("unsupported score type '{0}'")]
    UnsupportedScoreType(String),

    /// The request carried unusable parameters.
    #[error("invalid request: {0}")]
    Validation(#[source] ScoreError),

    /// A calculator failed on input it had accepted.
    #[error("score computation failed: {0}")]
    Calculation(#[source] ScoreError),
}

impl EngineError {
    /// True for failures the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EngineError::Calculation(_))
    }
}
