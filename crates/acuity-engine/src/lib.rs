//! acuity-engine
//!
//! The request-level facade: resolve the score type, run the calculator,
//! enrich the result, stamp timing. One `compute` call per request, no
//! state shared between calls.

pub mod config;
pub mod error;

use std::time::Instant;

use tracing::{error, info};
use uuid::Uuid;

use acuity_core::models::request::ScoreRequest;
use acuity_core::models::result::ScoreResult;
use acuity_core::score_type::ScoreType;
use acuity_insights::{InsightGenerator, enrich};
use acuity_scores::calculator_for;

pub use config::EngineConfig;
pub use error::EngineError;

/// Score engine over a pluggable insight generator.
///
/// Calculators are pure; the only suspension point is enrichment, which
/// is deadline-bounded and infallible. Identical requests therefore yield
/// identical results up to the enrichment text and timing.
pub struct Engine<G> {
    config: EngineConfig,
    generator: G,
}

impl<G: InsightGenerator> Engine<G> {
    pub fn new(config: EngineConfig, generator: G) -> Self {
        Engine { config, generator }
    }

    /// Compute one score end to end.
    ///
    /// Calculator failures are fatal to the request; no partial result is
    /// returned. Enrichment failures degrade to the local fallback inside
    /// the result instead.
    pub async fn compute(&self, request: &ScoreRequest) -> Result<ScoreResult, EngineError> {
        let started = Instant::now();
        let request_id = Uuid::new_v4();

        let score_type: ScoreType = request
            .score_type
            .parse()
            .map_err(|_| EngineError::UnsupportedScoreType(request.score_type.clone()))?;

        let calculator = calculator_for(score_type);
        let mut result = calculator
            .compute(&request.params, request.subtype.as_deref())
            .map_err(|score_error| {
                error!(
                    request_id = %request_id,
                    score_type = score_type.id(),
                    error = %score_error,
                    "score computation failed"
                );
                if score_error.is_validation() {
                    EngineError::Validation(score_error)
                } else {
                    EngineError::Calculation(score_error)
                }
            })?;

        let enrichment = enrich(
            &self.generator,
            self.config.enrichment_timeout,
            score_type,
            &request.params,
            result.score,
        )
        .await;

        let ai_status = enrichment.ai.status;
        result.insights.extend(enrichment.insights);
        result.ai_response = Some(enrichment.ai);
        result.response_time = started.elapsed().as_millis() as u64;

        info!(
            request_id = %request_id,
            score_type = score_type.id(),
            score = result.score,
            reliability = result.reliability,
            ai_status = ?ai_status,
            elapsed_ms = result.response_time,
            "score computed"
        );
        Ok(result)
    }
}
