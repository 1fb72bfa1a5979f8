//! acuity-insights
//!
//! AI enrichment for computed scores. A calculator's canned insights are
//! deterministic; this crate adds the narrative layer on top: prompt
//! construction, the OpenAI chat call, response parsing, and the local
//! fallback used whenever the provider is slow, down, or unconfigured.
//!
//! The entry point is [`pipeline::enrich`]. It never fails — every error
//! path degrades to the fallback insight with a machine-readable reason.

pub mod config;
pub mod error;
pub mod fallback;
pub mod openai;
pub mod parse;
pub mod pipeline;
pub mod prompt;

use std::future::Future;

use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

pub use error::GeneratorError;
pub use openai::OpenAiGenerator;
pub use pipeline::{Enrichment, enrich};

/// A provider of free-text clinical commentary for one computed score.
///
/// Implementations return the raw narrative; the pipeline owns deadlines,
/// parsing and fallback. A provider that can be switched off (missing
/// API key, kill switch) overrides `enabled`; the pipeline then skips
/// generation entirely and reports the `disabled` reason.
pub trait InsightGenerator: Send + Sync {
    /// Whether a generation attempt should be made at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Produce the narrative for one computed score.
    fn generate(
        &self,
        score_type: ScoreType,
        params: &ParamSet,
        score: f64,
    ) -> impl Future<Output = Result<String, GeneratorError>> + Send;
}

/// Generator used when no provider is configured. The pipeline routes to
/// the fallback on `enabled()` alone, so `generate` is never reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

impl InsightGenerator for DisabledGenerator {
    fn enabled(&self) -> bool {
        false
    }

    async fn generate(
        &self,
        _score_type: ScoreType,
        _params: &ParamSet,
        _score: f64,
    ) -> Result<String, GeneratorError> {
        Err(GeneratorError::Disabled)
    }
}
