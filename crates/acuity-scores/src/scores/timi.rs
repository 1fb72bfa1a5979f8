use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::ScoreResult;
use acuity_core::params::ParamSet;
use acuity_core::score_type::{ScoreType, TimiVariant};

use crate::error::ScoreError;
use crate::schema::{self, ParamIssue, ParamSpec};
use crate::tables::timi as t;
use crate::{ScoreCalculator, classify};

/// TIMI: short-term risk after myocardial infarction. Two subtypes with
/// different criteria; the request's `subtype` field selects one and is the
/// only hard requirement. Every parameter is optional — an empty set simply
/// scores zero.
pub struct Timi;

const PARAMS: &[ParamSpec] = &[
    ParamSpec::number("age", false, 18.0, 120.0),
    ParamSpec::flag("diabetes", false),
    ParamSpec::flag("hypertension", false),
    ParamSpec::flag("angina", false),
    ParamSpec::number("systolicBP", false, 40.0, 300.0),
    ParamSpec::number("heartRate", false, 20.0, 300.0),
    ParamSpec::number("killipClass", false, 1.0, 4.0),
    ParamSpec::number("weight", false, 30.0, 200.0),
    ParamSpec::flag("anteriorSTEMI", false),
    ParamSpec::flag("lbbb", false),
    ParamSpec::number("timeToTreatment", false, 0.0, 72.0),
    ParamSpec::number("riskFactorsCount", false, 0.0, 5.0),
    ParamSpec::flag("knownCAD", false),
    ParamSpec::flag("noAspirinLast7Days", false),
    ParamSpec::flag("severeAngina", false),
    ParamSpec::flag("stDeviation", false),
    ParamSpec::flag("elevatedMarkers", false),
];

impl ScoreCalculator for Timi {
    fn score_type(&self) -> ScoreType {
        ScoreType::Timi
    }

    fn name(&self) -> &str {
        "TIMI"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn validate_params(&self, params: &ParamSet, subtype: Option<&str>) -> Vec<ParamIssue> {
        let mut issues = schema::check(PARAMS, params);
        match subtype {
            None => issues.push(ParamIssue {
                parameter: "subtype".to_string(),
                message: "subtype is required for TIMI (STEMI or NSTEMI)".to_string(),
            }),
            Some(s) if TimiVariant::from_subtype(s).is_none() => issues.push(ParamIssue {
                parameter: "subtype".to_string(),
                message: format!("unknown TIMI subtype '{s}'"),
            }),
            Some(_) => {}
        }
        issues
    }

    fn compute(&self, params: &ParamSet, subtype: Option<&str>) -> Result<ScoreResult, ScoreError> {
        let variant = match subtype {
            None => return Err(ScoreError::SubtypeRequired),
            Some(s) => {
                TimiVariant::from_subtype(s).ok_or_else(|| ScoreError::UnknownSubtype(s.to_string()))?
            }
        };

        let score = match variant {
            TimiVariant::Stemi => stemi_points(params),
            TimiVariant::Nstemi => nstemi_points(params),
        };

        let classified = classify::timi(score as f64, variant);
        let mut result = ScoreResult::new(
            format!("TIMI {}", variant.label()),
            score as f64,
            classified.risk_level,
            classified.interpretation.clone(),
        );
        result.insights = insights(score, variant, classified.interpretation);
        Ok(result)
    }
}

fn stemi_points(params: &ParamSet) -> u32 {
    let mut score = 0;

    if let Some(age) = params.number("age") {
        if age >= 75.0 {
            score += t::AGE_75;
        } else if age >= 65.0 {
            score += t::AGE_65;
        }
    }
    if params.flag("diabetes") == Some(true)
        || params.flag("hypertension") == Some(true)
        || params.flag("angina") == Some(true)
    {
        score += t::RISK_CLUSTER;
    }
    if let Some(systolic) = params.number("systolicBP")
        && systolic < 100.0
    {
        score += t::LOW_SBP;
    }
    if let Some(heart_rate) = params.number("heartRate")
        && heart_rate > 100.0
    {
        score += t::TACHYCARDIA;
    }
    if let Some(killip) = params.number("killipClass")
        && killip > 1.0
    {
        score += t::KILLIP_ABOVE_1;
    }
    if let Some(weight) = params.number("weight")
        && weight < 67.0
    {
        score += t::LOW_WEIGHT;
    }
    if params.flag("anteriorSTEMI") == Some(true) || params.flag("lbbb") == Some(true) {
        score += t::ANTERIOR_OR_LBBB;
    }
    if let Some(hours) = params.number("timeToTreatment")
        && hours > 4.0
    {
        score += t::LATE_PRESENTATION;
    }

    score
}

fn nstemi_points(params: &ParamSet) -> u32 {
    let mut score = 0;

    if let Some(age) = params.number("age")
        && age >= t::NSTEMI_AGE_THRESHOLD
    {
        score += t::NSTEMI_CRITERION;
    }
    if let Some(count) = params.number("riskFactorsCount")
        && count >= t::NSTEMI_RISK_FACTOR_THRESHOLD
    {
        score += t::NSTEMI_CRITERION;
    }
    for flag in [
        "knownCAD",
        "noAspirinLast7Days",
        "severeAngina",
        "stDeviation",
        "elevatedMarkers",
    ] {
        if params.flag(flag) == Some(true) {
            score += t::NSTEMI_CRITERION;
        }
    }

    score
}

fn insights(score: u32, variant: TimiVariant, interpretation: String) -> Vec<Insight> {
    let recommendations = match variant {
        TimiVariant::Stemi if score >= 5 => {
            vec!["Angioplastie primaire urgente", "Monitoring continu"]
        }
        TimiVariant::Stemi => vec!["Stratégie de reperfusion selon protocole"],
        TimiVariant::Nstemi if score >= 4 => vec!["Stratégie invasive précoce (<24h)"],
        TimiVariant::Nstemi => vec!["Stratégie conservatrice possible"],
    };

    let mut insight = Insight::new(InsightKind::Clinical, interpretation);
    insight.category = Some("Risque".to_string());
    insight.recommendations = Some(recommendations.into_iter().map(String::from).collect());
    vec![insight]
}
