use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity channel of an insight. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InsightKind {
    Clinical,
    Warning,
    Critical,
    Alert,
    Info,
}

/// One structured clinical insight attached to a score result.
///
/// Calculators emit these from their interpretation bands; the enrichment
/// pipeline appends AI-generated (or fallback) ones. Only `type` and
/// `message` are always present.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implications: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl Insight {
    /// A bare insight with just a severity and a message.
    pub fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Insight {
            kind,
            category: None,
            message: message.into(),
            implications: None,
            recommendations: None,
            evidence: None,
        }
    }
}
