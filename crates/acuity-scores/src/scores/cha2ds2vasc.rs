use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::cha2ds2vasc as t;
use crate::{ScoreCalculator, classify, reliability};

/// CHA₂DS₂-VASc: annual stroke risk in non-valvular atrial fibrillation.
/// Pure criterion count with the published risk table attached.
pub struct Cha2ds2Vasc;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("age", true, 18.0, 120.0),
    ParamSpec::label("gender", true, &["M", "F"]),
    ParamSpec::flag("congestiveHeartFailure", true),
    ParamSpec::flag("hypertension", true),
    ParamSpec::flag("diabetes", true),
    ParamSpec::flag("stroke", true),
    ParamSpec::flag("vascularDisease", true),
];

impl ScoreCalculator for Cha2ds2Vasc {
    fn score_type(&self) -> ScoreType {
        ScoreType::Cha2ds2Vasc
    }

    fn name(&self) -> &str {
        "CHA2DS2-VASc"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut score = 0;
        if let Some(age) = params.number("age") {
            if age >= 75.0 {
                score += t::AGE_75;
            } else if age >= 65.0 {
                score += t::AGE_65;
            }
        }
        if params.text("gender") == Some("F") {
            score += t::FEMALE;
        }
        for flag in ["congestiveHeartFailure", "hypertension", "diabetes", "vascularDisease"] {
            if params.flag(flag) == Some(true) {
                score += t::CRITERION;
            }
        }
        if params.flag("stroke") == Some(true) {
            score += t::STROKE;
        }

        let annual_risk = t::ANNUAL_STROKE_RISK[(score as usize).min(9)];
        let recommendation = recommendation(score);
        let classified = classify::cha2ds2vasc(score as f64);

        let mut result = ScoreResult::new(
            self.name(),
            score as f64,
            classified.risk_level.clone(),
            classified.interpretation,
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.annual_stroke_risk = Some(annual_risk);
        result.recommendation = Some(recommendation.to_string());
        result.insights = insights(score, classified.risk_level.level(), recommendation);
        Ok(result)
    }
}

fn recommendation(score: u32) -> &'static str {
    match score {
        0 => "Pas d'anticoagulation recommandée",
        1 => "Anticoagulation à discuter",
        _ => "Anticoagulation recommandée",
    }
}

fn insights(score: u32, level: &str, recommendation: &str) -> Vec<Insight> {
    let detailed = if score >= 2 {
        vec![
            "Anticoagulation par AVK (INR 2-3) ou AOD",
            "Surveillance régulière de l'anticoagulation",
            "Évaluation du risque hémorragique",
        ]
    } else {
        vec!["Réévaluation périodique du risque"]
    };

    let mut insight = Insight::new(
        InsightKind::Clinical,
        format!("Risque {} - {}", level.to_lowercase(), recommendation),
    );
    insight.category = Some("Anticoagulation".to_string());
    insight.recommendations = Some(detailed.into_iter().map(String::from).collect());
    vec![insight]
}
