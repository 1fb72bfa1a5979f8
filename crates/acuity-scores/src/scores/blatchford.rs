use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;

use crate::error::ScoreError;
use crate::schema::ParamSpec;
use crate::tables::blatchford as t;
use crate::tables::points;
use crate::{ScoreCalculator, classify, reliability};

/// Glasgow-Blatchford: need for intervention in upper GI bleeding.
/// Banded urea, sex-specific hemoglobin and blood pressure tables plus
/// five categorical criteria. A zero score supports ambulatory care.
pub struct Blatchford;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("bloodUrea", true, 0.0, 50.0),
    ParamSpec::number("hemoglobin", true, 0.0, 25.0),
    ParamSpec::label("gender", true, &["M", "F"]),
    ParamSpec::number("systolicBP", true, 0.0, 300.0),
    ParamSpec::number("pulse", false, 0.0, 300.0),
    ParamSpec::flag("melena", false),
    ParamSpec::flag("syncope", false),
    ParamSpec::flag("hepaticDisease", false),
    ParamSpec::flag("cardiacFailure", false),
];

impl ScoreCalculator for Blatchford {
    fn score_type(&self) -> ScoreType {
        ScoreType::Blatchford
    }

    fn name(&self) -> &str {
        "Blatchford"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn compute(&self, params: &ParamSet, _subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let (reliability, missing) = reliability::assess(PARAMS, params);

        let mut score = 0.0;
        if let Some(urea) = params.number("bloodUrea") {
            score += points(t::UREA, urea);
        }
        // The hemoglobin bands differ by sex; without the sex the criterion
        // is skipped and reliability already reflects the gap.
        if let Some(hemoglobin) = params.number("hemoglobin")
            && let Some(gender) = params.text("gender")
        {
            let bands = if gender == "F" {
                t::HEMOGLOBIN_WOMEN
            } else {
                t::HEMOGLOBIN_MEN
            };
            score += points(bands, hemoglobin);
        }
        if let Some(systolic) = params.number("systolicBP") {
            score += points(t::SYSTOLIC_BP, systolic);
        }
        if let Some(pulse) = params.number("pulse")
            && pulse >= t::TACHYCARDIA_THRESHOLD
        {
            score += t::TACHYCARDIA;
        }
        if params.flag("melena") == Some(true) {
            score += t::MELENA;
        }
        if params.flag("syncope") == Some(true) {
            score += t::SYNCOPE;
        }
        if params.flag("hepaticDisease") == Some(true) {
            score += t::HEPATIC_DISEASE;
        }
        if params.flag("cardiacFailure") == Some(true) {
            score += t::CARDIAC_FAILURE;
        }

        let classified = classify::blatchford(score);
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
        vec!["Prise en charge ambulatoire envisageable"]
    } else if score <= 8.0 {
        vec!["Hospitalisation recommandée", "Endoscopie à planifier"]
    } else {
        vec!["Endoscopie urgente", "Surveillance continue"]
    };

    let mut insight = Insight::new(InsightKind::Clinical, interpretation);
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
