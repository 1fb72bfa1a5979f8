use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::meld as t;
use crate::{ScoreCalculator, classify, reliability};

/// MELD (classic): end-stage liver disease severity from three labs.
/// Inputs are clamped the way UNOS applies the formula — creatinine to
/// [1, 4], bilirubin and INR floored at 1 — so the logarithms stay sane.
pub struct Meld;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("creatinine", true, 0.0, 15.0),
    ParamSpec::number("bilirubin", true, 0.0, 100.0),
    ParamSpec::number("inr", true, 0.0, 20.0),
];

impl ScoreCalculator for Meld {
    fn score_type(&self) -> ScoreType {
        ScoreType::Meld
    }

    fn name(&self) -> &str {
        "MELD"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut sum = t::CONSTANT;
        if let Some(creatinine) = params.number("creatinine") {
            sum += t::CREATININE
                * creatinine
                    .clamp(t::CREATININE_FLOOR, t::CREATININE_CEILING)
                    .ln();
        }
        if let Some(bilirubin) = params.number("bilirubin") {
            sum += t::BILIRUBIN * bilirubin.max(t::LOG_FLOOR).ln();
        }
        if let Some(inr) = params.number("inr") {
            sum += t::INR * inr.max(t::LOG_FLOOR).ln();
        }

        let score = (t::SCALE * sum).round();
        if !score.is_finite() {
            return Err(ScoreError::NonFinite {
                score_name: self.name().to_string(),
            });
        }

        let classified = classify::meld(score);
        let mut result = ScoreResult::new(
            self.name(),
            score,
            classified.risk_level,
            classified.interpretation.clone(),
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.insights = insights(score, classified.interpretation);
        Ok(result)
    }
}

fn insights(score: f64, interpretation: String) -> Vec<Insight> {
    let recommendations = if score >= 20.0 {
        vec!["Évaluation pour transplantation hépatique"]
    } else if score >= 10.0 {
        vec!["Surveillance spécialisée"]
    } else {
        vec!["Suivi standard"]
    };

    let mut insight = Insight::new(InsightKind::Clinical, interpretation);
    insight.category = Some("Pronostic".to_string());
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
