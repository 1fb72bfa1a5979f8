use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ai::AiResponse;
use super::insight::Insight;

/// Risk level of a computed score.
///
/// Most scores report a plain label; GRACE and TIMI attach the event-rate
/// description their band tables carry. Untagged on the wire: a string or a
/// `{ level, description }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RiskLevel {
    Detailed { level: String, description: String },
    Label(String),
}

impl RiskLevel {
    pub fn label(label: impl Into<String>) -> Self {
        RiskLevel::Label(label.into())
    }

    pub fn detailed(level: impl Into<String>, description: impl Into<String>) -> Self {
        RiskLevel::Detailed {
            level: level.into(),
            description: description.into(),
        }
    }

    /// The level string regardless of shape.
    pub fn level(&self) -> &str {
        match self {
            RiskLevel::Detailed { level, .. } => level,
            RiskLevel::Label(label) => label,
        }
    }
}

/// Per-organ SOFA sub-scores (0–4 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SofaComponents {
    pub respiratory: u8,
    pub coagulation: u8,
    pub hepatic: u8,
    pub cardiovascular: u8,
    pub neurological: u8,
    pub renal: u8,
}

impl SofaComponents {
    pub fn total(&self) -> u8 {
        self.respiratory
            + self.coagulation
            + self.hepatic
            + self.cardiovascular
            + self.neurological
            + self.renal
    }
}

/// The full result envelope for one computed score.
///
/// Field names are a deployed wire contract; score-specific extras are
/// optional and omitted when absent. `response_time` (milliseconds) and
/// `ai_response` are stamped by the engine, not by calculators.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub score: f64,
    /// Parameter completeness, 0–100.
    pub reliability: f64,
    pub score_name: String,
    pub risk_level: RiskLevel,
    pub interpretation: String,
    /// Required parameters absent from the request, in declaration order.
    pub missing_parameters: Vec<String>,
    /// Child-Pugh class (`A`, `B`, `C`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    /// CHA₂DS₂-VASc: annual stroke risk, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_stroke_risk: Option<f64>,
    /// CHA₂DS₂-VASc: anticoagulation recommendation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// GRACE: 6-month mortality as a fraction in [0, 1].
    #[serde(rename = "mortality6Month", skip_serializing_if = "Option::is_none")]
    pub mortality_6_month: Option<f64>,
    /// Sepsis: qSOFA total (0–3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsofa: Option<u8>,
    /// Sepsis: SOFA total (0–24).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sofa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sofa_components: Option<SofaComponents>,
    pub insights: Vec<Insight>,
    /// Total engine time for this request, milliseconds.
    pub response_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<AiResponse>,
}

impl ScoreResult {
    /// A result with the mandatory fields set and every extra empty.
    pub fn new(
        score_name: impl Into<String>,
        score: f64,
        risk_level: RiskLevel,
        interpretation: impl Into<String>,
    ) -> Self {
        ScoreResult {
            score,
            reliability: 100.0,
            score_name: score_name.into(),
            risk_level,
            interpretation: interpretation.into(),
            missing_parameters: Vec::new(),
            classification: None,
            annual_stroke_risk: None,
            recommendation: None,
            mortality_6_month: None,
            qsofa: None,
            sofa: None,
            sofa_components: None,
            insights: Vec::new(),
            response_time: 0,
            ai_response: None,
        }
    }
}
