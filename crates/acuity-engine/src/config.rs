use std::env;
use std::time::Duration;

use acuity_insights::pipeline;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Deadline for one enrichment attempt per request.
    pub enrichment_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            enrichment_timeout: pipeline::DEFAULT_DEADLINE,
        }
    }
}

impl EngineConfig {
    /// Default deadline overridden by `ACUITY_AI_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        let enrichment_timeout = env::var("ACUITY_AI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(pipeline::DEFAULT_DEADLINE);
        EngineConfig { enrichment_timeout }
    }
}
