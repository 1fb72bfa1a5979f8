use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::childpugh as t;
use crate::tables::label_points;
use crate::{ScoreCalculator, classify, reliability};

/// Child-Pugh: cirrhosis severity. Five criteria scored 1–3 each, summed
/// into classes A (≤6), B (7–9) and C (≥10).
pub struct ChildPugh;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::label("ascites", true, &["none", "mild", "severe"]),
    ParamSpec::number("bilirubin", true, 0.0, 100.0),
    ParamSpec::number("albumin", true, 0.0, 10.0),
    ParamSpec::number("prothrombin", true, 0.0, 100.0),
    ParamSpec::label("encephalopathy", true, &["none", "mild", "severe"]),
];

impl ScoreCalculator for ChildPugh {
    fn score_type(&self) -> ScoreType {
        ScoreType::ChildPugh
    }

    fn name(&self) -> &str {
        "Child-Pugh"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut score = 0.0;
        if let Some(ascites) = params.text("ascites") {
            score += label_points(t::ASCITES, ascites).ok_or_else(|| unknown("ascites", ascites))?;
        }
        if let Some(bilirubin) = params.number("bilirubin") {
            score += bilirubin_points(bilirubin);
        }
        if let Some(albumin) = params.number("albumin") {
            score += albumin_points(albumin);
        }
        if let Some(prothrombin) = params.number("prothrombin") {
            score += prothrombin_points(prothrombin);
        }
        if let Some(encephalopathy) = params.text("encephalopathy") {
            score += label_points(t::ENCEPHALOPATHY, encephalopathy)
                .ok_or_else(|| unknown("encephalopathy", encephalopathy))?;
        }

        let classification = if score >= t::CLASS_C_FLOOR {
            "C"
        } else if score >= t::CLASS_B_FLOOR {
            "B"
        } else {
            "A"
        };

        let classified = classify::childpugh(score);
        let mut result = ScoreResult::new(
            self.name(),
            score,
            classified.risk_level,
            classified.interpretation,
        );
        result.reliability = reliability;
        result.missing_parameters = missing;
        result.classification = Some(classification.to_string());
        result.insights = insights(classification);
        Ok(result)
    }
}

/// Bilirubin, mg/dL: <2 → 1, 2–3 → 2, >3 → 3.
fn bilirubin_points(bilirubin: f64) -> f64 {
    if bilirubin < 2.0 {
        1.0
    } else if bilirubin <= 3.0 {
        2.0
    } else {
        3.0
    }
}

/// Albumin, g/dL: >3.5 → 1, 2.8–3.5 → 2, <2.8 → 3.
fn albumin_points(albumin: f64) -> f64 {
    if albumin > 3.5 {
        1.0
    } else if albumin >= 2.8 {
        2.0
    } else {
        3.0
    }
}

/// Prothrombin time prolongation, seconds: <4 → 1, 4–6 → 2, >6 → 3.
fn prothrombin_points(prothrombin: f64) -> f64 {
    if prothrombin < 4.0 {
        1.0
    } else if prothrombin <= 6.0 {
        2.0
    } else {
        3.0
    }
}

fn unknown(parameter: &str, label: &str) -> ScoreError {
    ScoreError::InvalidParameter {
        parameter: parameter.to_string(),
        message: format!("unknown label '{label}'"),
    }
}

fn insights(classification: &str) -> Vec<Insight> {
    let recommendations = match classification {
        "A" => vec!["Surveillance semestrielle"],
        "B" => vec!["Surveillance rapprochée", "Dépistage des complications"],
        _ => vec![
            "Évaluation pour transplantation hépatique",
            "Prise en charge spécialisée",
        ],
    };

    let mut insight = Insight::new(
        InsightKind::Clinical,
        format!("Cirrhose Child-Pugh {classification}"),
    );
    insight.category = Some("Pronostic".to_string());
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
