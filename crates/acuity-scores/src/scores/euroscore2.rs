use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::euroscore2 as t;
use crate::tables::{label_points, round2};
use crate::{ScoreCalculator, classify, reliability};

/// EuroSCORE II: predicted operative mortality (%) after cardiac surgery.
/// Logistic model over the published coefficient table; every present
/// contributor adds to the logit, absent required ones cost reliability.
pub struct EuroScore2;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("age", true, 18.0, 120.0),
    ParamSpec::label("gender", true, &["M", "F"]),
    ParamSpec::number("creatinine", true, 0.0, 1000.0),
    ParamSpec::number("lvef", true, 0.0, 100.0),
    ParamSpec::number("nyha", true, 1.0, 4.0),
    ParamSpec::label("urgency", true, &["elective", "urgent", "emergency", "salvage"]),
    ParamSpec::flag("diabetes", false),
    ParamSpec::number("pulmonaryPressure", false, 0.0, 150.0),
    ParamSpec::label("weightOfIntervention", false, &["single", "double", "triple"]),
    ParamSpec::flag("previousCardiacSurgery", false),
    ParamSpec::flag("criticalPreoperativeState", false),
    ParamSpec::flag("activeEndocarditis", false),
    ParamSpec::flag("chronicLungDisease", false),
];

impl ScoreCalculator for EuroScore2 {
    fn score_type(&self) -> ScoreType {
        ScoreType::EuroScore2
    }

    fn name(&self) -> &str {
        "EuroSCORE II"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut logit = t::INTERCEPT;

        if let Some(age) = params.number("age") {
            logit += t::AGE * (age / 90.0).powi(2);
        }
        if params.text("gender") == Some("F") {
            logit += t::FEMALE;
        }
        if let Some(creatinine) = params.number("creatinine") {
            logit += t::CREATININE * creatinine.min(t::CREATININE_CEILING);
        }
        if let Some(lvef) = params.number("lvef") {
            logit += lvef_coefficient(lvef);
        }
        if let Some(nyha) = params.number("nyha") {
            logit += t::NYHA[(nyha as usize).clamp(1, 4) - 1];
        }
        if let Some(urgency) = params.text("urgency") {
            logit += label_points(t::URGENCY, urgency).ok_or_else(|| unknown("urgency", urgency))?;
        }
        if params.flag("diabetes") == Some(true) {
            logit += t::DIABETES;
        }
        if let Some(pressure) = params.number("pulmonaryPressure") {
            logit += pulmonary_coefficient(pressure);
        }
        if let Some(weight) = params.text("weightOfIntervention") {
            logit += label_points(t::WEIGHT_OF_INTERVENTION, weight)
                .ok_or_else(|| unknown("weightOfIntervention", weight))?;
        }
        if params.flag("previousCardiacSurgery") == Some(true) {
            logit += t::PREVIOUS_CARDIAC_SURGERY;
        }
        if params.flag("criticalPreoperativeState") == Some(true) {
            logit += t::CRITICAL_PREOPERATIVE_STATE;
        }
        if params.flag("activeEndocarditis") == Some(true) {
            logit += t::ACTIVE_ENDOCARDITIS;
        }
        if params.flag("chronicLungDisease") == Some(true) {
            logit += t::CHRONIC_LUNG_DISEASE;
        }

        let score = round2(100.0 / (1.0 + (-logit).exp()));
        if !score.is_finite() {
            return Err(ScoreError::NonFinite {
                score_name: self.name().to_string(),
            });
        }

        let classified = classify::euroscore2(score);
        let mut result = ScoreResult::new(
            self.name(),
            score,
            classified.risk_level,
            classified.interpretation,
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.insights = insights(score);
        Ok(result)
    }
}

fn lvef_coefficient(lvef: f64) -> f64 {
    if lvef > 50.0 {
        0.0
    } else if lvef > 30.0 {
        t::LVEF_MODERATE
    } else if lvef > 20.0 {
        t::LVEF_POOR
    } else {
        t::LVEF_VERY_POOR
    }
}

fn pulmonary_coefficient(pressure: f64) -> f64 {
    if pressure > 55.0 {
        t::PULMONARY_SEVERE
    } else if pressure > 30.0 {
        t::PULMONARY_MODERATE
    } else {
        0.0
    }
}

fn unknown(parameter: &str, label: &str) -> ScoreError {
    ScoreError::InvalidParameter {
        parameter: parameter.to_string(),
        message: format!("unknown label '{label}'"),
    }
}

fn insights(score: f64) -> Vec<Insight> {
    let (band, implications, recommendations) = if score < 2.0 {
        ("faible", "Mortalité prédite <2%", "Chirurgie possible sans délai")
    } else if score < 5.0 {
        (
            "modéré",
            "Mortalité prédite 2-5%",
            "Optimisation préopératoire recommandée",
        )
    } else {
        (
            "élevé",
            "Mortalité prédite >5%",
            "Discussion en réunion médico-chirurgicale",
        )
    };

    let mut insight = Insight::new(InsightKind::Alert, format!("Risque opératoire {band}"));
    insight.category = Some("Risque global".to_string());
    insight.implications = Some(vec![implications.to_string()]);
    insight.recommendations = Some(vec![recommendations.to_string()]);
    vec![insight]
}
