//! Enrichment pipeline: one generation attempt raced against a deadline.

use std::time::Duration;

use tracing::{info, warn};

use acuity_core::models::ai::{AiResponse, AiSource, AiStatus, RawAiExchange};
use acuity_core::models::insight::Insight;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::{InsightGenerator, fallback, parse};

/// Default deadline for one enrichment attempt.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// Outcome of one enrichment attempt. Always usable: failures degrade to
/// the local fallback instead of propagating.
#[derive(Debug, Clone)]
pub struct Enrichment {
    /// Insights to append after the calculator's own.
    pub insights: Vec<Insight>,
    /// Provenance reported to the caller.
    pub ai: AiResponse,
}

/// Ask the generator for commentary, waiting at most `deadline`.
///
/// A response that misses the deadline is discarded when it eventually
/// completes. Every failure path lands on the fallback insight with its
/// reason; this function never errors.
pub async fn enrich<G: InsightGenerator>(
    generator: &G,
    deadline: Duration,
    score_type: ScoreType,
    params: &ParamSet,
    score: f64,
) -> Enrichment {
    if !generator.enabled() {
        return fallback_enrichment(false, fallback::reason::DISABLED);
    }

    let attempt = tokio::time::timeout(deadline, generator.generate(score_type, params, score));
    let content = match attempt.await {
        Err(_) => {
            warn!(
                score_type = score_type.id(),
                deadline_ms = deadline.as_millis() as u64,
                "insight generation timed out"
            );
            return fallback_enrichment(true, fallback::reason::TIMEOUT);
        }
        Ok(Err(error)) => {
            warn!(score_type = score_type.id(), error = %error, "insight generation failed");
            return fallback_enrichment(true, fallback::reason::PROVIDER);
        }
        Ok(Ok(content)) => content,
    };

    match parse::sections(&content) {
        Some(insights) => {
            info!(
                score_type = score_type.id(),
                insights = insights.len(),
                "insight generation succeeded"
            );
            Enrichment {
                insights,
                ai: AiResponse {
                    enabled: true,
                    source: AiSource::Openai,
                    status: AiStatus::Success,
                    fallback_reason: None,
                    raw: Some(RawAiExchange {
                        timestamp: jiff::Timestamp::now(),
                        content,
                    }),
                },
            }
        }
        None => {
            warn!(score_type = score_type.id(), "unusable insight response");
            fallback_enrichment(true, fallback::reason::PARSE)
        }
    }
}

fn fallback_enrichment(enabled: bool, reason: &str) -> Enrichment {
    Enrichment {
        insights: vec![fallback::insight()],
        ai: AiResponse {
            enabled,
            source: AiSource::Local,
            status: AiStatus::Fallback,
            fallback_reason: Some(reason.to_string()),
            raw: None,
        },
    }
}
