use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::grace as t;
use crate::tables::{points, round2};
use crate::{ScoreCalculator, classify, reliability};

/// GRACE: additive point score for mortality in acute coronary syndrome.
/// Banded lookups for age, heart rate, blood pressure and creatinine, plus
/// the Killip class and three categorical adds.
pub struct Grace;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("age", true, 18.0, 120.0),
    ParamSpec::number("heartRate", true, 20.0, 300.0),
    ParamSpec::number("systolicBP", true, 40.0, 300.0),
    ParamSpec::number("creatinine", true, 0.0, 15.0),
    ParamSpec::number("killipClass", true, 1.0, 4.0),
    ParamSpec::flag("cardiacArrest", false),
    ParamSpec::flag("elevatedCardiacMarkers", false),
    ParamSpec::flag("stSegmentDeviation", false),
];

impl ScoreCalculator for Grace {
    fn score_type(&self) -> ScoreType {
        ScoreType::Grace
    }

    fn name(&self) -> &str {
        "GRACE"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut score = 0.0;
        if let Some(age) = params.number("age") {
            score += points(t::AGE, age);
        }
        if let Some(heart_rate) = params.number("heartRate") {
            score += points(t::HEART_RATE, heart_rate);
        }
        if let Some(systolic) = params.number("systolicBP") {
            score += points(t::SYSTOLIC_BP, systolic);
        }
        if let Some(creatinine) = params.number("creatinine") {
            score += points(t::CREATININE, creatinine);
        }
        if let Some(killip) = params.number("killipClass") {
            score += t::KILLIP[(killip as usize).clamp(1, 4) - 1];
        }
        if params.flag("cardiacArrest") == Some(true) {
            score += t::CARDIAC_ARREST;
        }
        if params.flag("elevatedCardiacMarkers") == Some(true) {
            score += t::ELEVATED_MARKERS;
        }
        if params.flag("stSegmentDeviation") == Some(true) {
            score += t::ST_DEVIATION;
        }

        let classified = classify::grace(score);
        let mut result = ScoreResult::new(
            self.name(),
            score,
            classified.risk_level,
            classified.interpretation.clone(),
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.mortality_6_month = Some(round2(1.0 / (1.0 + (-((score - 200.0) / 100.0)).exp())));
        result.insights = insights(score, classified.interpretation);
        Ok(result)
    }
}

fn insights(score: f64, interpretation: String) -> Vec<Insight> {
    let recommendations = if score >= 140.0 {
        vec!["Coronarographie urgente", "Surveillance USI"]
    } else if score >= 109.0 {
        vec!["Coronarographie dans les 24h"]
    } else {
        vec!["Stratégie non invasive possible"]
    };

    let mut insight = Insight::new(InsightKind::Clinical, interpretation);
    insight.category = Some("Risque".to_string());
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
