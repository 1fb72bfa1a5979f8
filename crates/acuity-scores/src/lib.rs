//! acuity-scores
//!
//! Clinical risk score definitions and calculators. Pure computation — no
//! I/O dependency. Each score declares the parameters it reads, computes
//! its points from the risk-factor tables, and classifies the result
//! through the shared band tables.

pub mod classify;
pub mod error;
pub mod reliability;
pub mod schema;
pub mod scores;
pub mod tables;

use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use error::ScoreError;
use schema::{ParamIssue, ParamSpec};

/// Trait implemented by each clinical risk score.
pub trait ScoreCalculator: Send + Sync {
    /// The registry identifier of this score.
    fn score_type(&self) -> ScoreType;

    /// Human-readable name (e.g., "EuroSCORE II", "GRACE").
    fn name(&self) -> &str;

    /// The parameters this score reads, in declaration order.
    fn parameters(&self) -> &[ParamSpec];

    /// Check present parameters against their declarations. Absent
    /// parameters are not issues; they degrade reliability instead.
    fn validate_params(&self, params: &ParamSet, subtype: Option<&str>) -> Vec<ParamIssue> {
        let _ = subtype;
        schema::check(self.parameters(), params)
    }

    /// Compute the score from whatever parameters are present.
    fn compute(&self, params: &ParamSet, subtype: Option<&str>)
    -> Result<ScoreResult, ScoreError>;
}

/// The calculator for one score type.
pub fn calculator_for(score_type: ScoreType) -> Box<dyn ScoreCalculator> {
    match score_type {
        ScoreType::EuroScore2 => Box::new(scores::euroscore2::EuroScore2),
        ScoreType::Grace => Box::new(scores::grace::Grace),
        ScoreType::Timi => Box::new(scores::timi::Timi),
        ScoreType::Cha2ds2Vasc => Box::new(scores::cha2ds2vasc::Cha2ds2Vasc),
        ScoreType::Sepsis => Box::new(scores::sepsis::Sepsis),
        ScoreType::ChildPugh => Box::new(scores::childpugh::ChildPugh),
        ScoreType::Meld => Box::new(scores::meld::Meld),
        ScoreType::Blatchford => Box::new(scores::blatchford::Blatchford),
        ScoreType::Rockall => Box::new(scores::rockall::Rockall),
    }
}

/// All registered calculators, in registry order.
pub fn all_calculators() -> Vec<Box<dyn ScoreCalculator>> {
    ScoreType::ALL.into_iter().map(calculator_for).collect()
}
