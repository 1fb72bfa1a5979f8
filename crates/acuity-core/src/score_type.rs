use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The risk scores the engine can compute.
///
/// Wire identifiers are the lowercase ids clients send in
/// `ScoreRequest::score_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ScoreType {
    /// EuroSCORE II — operative mortality after cardiac surgery.
    EuroScore2,
    /// GRACE — in-hospital and 6-month mortality in acute coronary syndrome.
    Grace,
    /// TIMI — short-term risk in STEMI / NSTEMI (subtype required).
    Timi,
    /// CHA₂DS₂-VASc — annual stroke risk in atrial fibrillation.
    Cha2ds2Vasc,
    /// qSOFA / SOFA composite for sepsis screening.
    Sepsis,
    /// Child-Pugh — cirrhosis severity (classes A–C).
    ChildPugh,
    /// MELD — end-stage liver disease, transplant prioritization.
    Meld,
    /// Glasgow-Blatchford — upper GI bleeding, need for intervention.
    Blatchford,
    /// Rockall (pre-endoscopic) — upper GI bleeding mortality.
    Rockall,
}

impl ScoreType {
    pub const ALL: [ScoreType; 9] = [
        ScoreType::EuroScore2,
        ScoreType::Grace,
        ScoreType::Timi,
        ScoreType::Cha2ds2Vasc,
        ScoreType::Sepsis,
        ScoreType::ChildPugh,
        ScoreType::Meld,
        ScoreType::Blatchford,
        ScoreType::Rockall,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ScoreType::EuroScore2 => "euroscore2",
            ScoreType::Grace => "grace",
            ScoreType::Timi => "timi",
            ScoreType::Cha2ds2Vasc => "cha2ds2vasc",
            ScoreType::Sepsis => "sepsis",
            ScoreType::ChildPugh => "childpugh",
            ScoreType::Meld => "meld",
            ScoreType::Blatchford => "blatchford",
            ScoreType::Rockall => "rockall",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScoreType::EuroScore2 => "EuroSCORE II",
            ScoreType::Grace => "GRACE",
            ScoreType::Timi => "TIMI",
            ScoreType::Cha2ds2Vasc => "CHA2DS2-VASc",
            ScoreType::Sepsis => "Sepsis (qSOFA/SOFA)",
            ScoreType::ChildPugh => "Child-Pugh",
            ScoreType::Meld => "MELD",
            ScoreType::Blatchford => "Glasgow-Blatchford",
            ScoreType::Rockall => "Rockall",
        }
    }

    pub fn from_id(id: &str) -> Option<ScoreType> {
        ScoreType::ALL.iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown score type: {0}")]
pub struct UnknownScoreType(pub String);

impl FromStr for ScoreType {
    type Err = UnknownScoreType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreType::from_id(s).ok_or_else(|| UnknownScoreType(s.to_string()))
    }
}

/// TIMI subtype. The wire values are the exact uppercase strings clients
/// send in `ScoreRequest::subtype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum TimiVariant {
    Stemi,
    Nstemi,
}

impl TimiVariant {
    pub fn from_subtype(subtype: &str) -> Option<TimiVariant> {
        match subtype {
            "STEMI" => Some(TimiVariant::Stemi),
            "NSTEMI" => Some(TimiVariant::Nstemi),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimiVariant::Stemi => "STEMI",
            TimiVariant::Nstemi => "NSTEMI",
        }
    }
}
