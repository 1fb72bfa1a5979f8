use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::rockall as t;
use crate::tables::{label_points, points};
use crate::{ScoreCalculator, classify, reliability};

/// Rockall (pre-endoscopic extended with stigmata): rebleeding and
/// mortality risk in upper GI bleeding. Age band plus four category tables.
pub struct Rockall;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("age", true, 18.0, 120.0),
    ParamSpec::label("shock", true, &["none", "tachycardia", "hypotension"]),
    ParamSpec::label(
        "comorbidity",
        true,
        &["none", "cardiac", "renal", "hepatic", "metastatic"],
    ),
    ParamSpec::label(
        "diagnosis",
        true,
        &["malloryWeiss", "other", "pepticUlcer", "cancer"],
    ),
    ParamSpec::label(
        "stigmata",
        true,
        &["none", "darkSpot", "adherentClot", "visibleVessel", "activeBleed"],
    ),
];

impl ScoreCalculator for Rockall {
    fn score_type(&self) -> ScoreType {
        ScoreType::Rockall
    }

    fn name(&self) -> &str {
        "Rockall"
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
        for (name, table) in [
            ("shock", t::SHOCK),
            ("comorbidity", t::COMORBIDITY),
            ("diagnosis", t::DIAGNOSIS),
            ("stigmata", t::STIGMATA),
        ] {
            if let Some(label) = params.text(name) {
                score += label_points(table, label).ok_or_else(|| ScoreError::InvalidParameter {
                    parameter: name.to_string(),
                    message: format!("unknown label '{label}'"),
                })?;
            }
        }

        let classified = classify::rockall(score);
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
    let recommendations = if score <= 2.0 {
        vec!["Sortie précoce envisageable après endoscopie"]
    } else if score <= 4.0 {
        vec!["Surveillance hospitalière"]
    } else {
        vec!["Surveillance intensive", "Endoscopie de contrôle à discuter"]
    };

    let mut insight = Insight::new(InsightKind::Clinical, interpretation);
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
