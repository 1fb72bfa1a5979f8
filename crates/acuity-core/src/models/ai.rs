use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where the AI-channel insights of a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AiSource {
    /// Generated by the external model.
    Openai,
    /// Deterministic local fallback.
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AiStatus {
    Success,
    Fallback,
}

/// The raw model exchange, kept for clinician review of the unparsed text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAiExchange {
    pub timestamp: jiff::Timestamp,
    pub content: String,
}

/// Provenance record for the AI enrichment of one result.
///
/// `fallback_reason` carries one of the fixed reason strings the deployed
/// clients match on (`Timeout`, `Erreur OpenAI`, `Erreur de parsing`,
/// `disabled`); it is absent on success.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AiResponse {
    pub enabled: bool,
    pub source: AiSource,
    pub status: AiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawAiExchange>,
}
