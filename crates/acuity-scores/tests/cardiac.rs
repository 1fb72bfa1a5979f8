//! Cardiac calculators: EuroSCORE II, GRACE, TIMI and CHA2DS2-VASc.

use acuity_core::models::insight::InsightKind;
use acuity_core::models::result::{RiskLevel, ScoreResult};
use acuity_core::params::ParamSet;
use acuity_core::score_type::ScoreType;
use acuity_scores::calculator_for;
use acuity_scores::error::ScoreError;
use serde_json::json;

fn params(value: serde_json::Value) -> ParamSet {
    serde_json::from_value(value).expect("parameter map")
}

fn compute(score_type: ScoreType, value: serde_json::Value) -> ScoreResult {
    calculator_for(score_type)
        .compute(&params(value), None)
        .expect("calculation succeeds")
}

#[test]
fn euroscore2_low_risk_elective_case() {
    let result = compute(
        ScoreType::EuroScore2,
        json!({
            "age": 65,
            "gender": "M",
            "creatinine": 150,
            "lvef": 55,
            "nyha": 2,
            "urgency": "elective",
            "diabetes": true,
            "pulmonaryPressure": 40,
            "weightOfIntervention": "single"
        }),
    );

    assert_eq!(result.score, 1.34);
    assert_eq!(result.score_name, "EuroSCORE II");
    assert_eq!(result.reliability, 100.0);
    assert!(result.missing_parameters.is_empty());
    assert_eq!(result.risk_level, RiskLevel::label("Faible"));
    assert_eq!(result.interpretation, "Risque faible");

    let insight = &result.insights[0];
    assert_eq!(insight.kind, InsightKind::Alert);
    assert_eq!(insight.category.as_deref(), Some("Risque global"));
    assert_eq!(insight.message, "Risque opératoire faible");
    assert_eq!(
        insight.implications.as_deref(),
        Some(&["Mortalité prédite <2%".to_string()][..])
    );
    assert_eq!(
        insight.recommendations.as_deref(),
        Some(&["Chirurgie possible sans délai".to_string()][..])
    );
}

#[test]
fn euroscore2_missing_required_parameters_cost_reliability() {
    let result = compute(ScoreType::EuroScore2, json!({"age": 70, "gender": "M"}));

    // 4 of 6 required parameters absent, each worth 100/6 points.
    assert!((result.reliability - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(
        result.missing_parameters,
        vec!["creatinine", "lvef", "nyha", "urgency"]
    );
    assert!(result.score > 0.0);
    assert!(result.score < 2.0);
}

#[test]
fn euroscore2_zero_valued_parameter_is_present() {
    let result = compute(
        ScoreType::EuroScore2,
        json!({
            "age": 40,
            "gender": "F",
            "creatinine": 0,
            "lvef": 60,
            "nyha": 1,
            "urgency": "elective"
        }),
    );

    assert_eq!(result.reliability, 100.0);
    assert!(result.missing_parameters.is_empty());
}

#[test]
fn euroscore2_creatinine_is_capped() {
    let base = json!({
        "age": 60,
        "gender": "M",
        "lvef": 45,
        "nyha": 3,
        "urgency": "urgent"
    });

    let mut at_cap = base.clone();
    at_cap["creatinine"] = json!(350);
    let mut above_cap = base;
    above_cap["creatinine"] = json!(600);

    let at_cap = compute(ScoreType::EuroScore2, at_cap);
    let above_cap = compute(ScoreType::EuroScore2, above_cap);
    assert_eq!(at_cap.score, above_cap.score);
}

#[test]
fn euroscore2_unknown_urgency_label_is_rejected() {
    let err = calculator_for(ScoreType::EuroScore2)
        .compute(
            &params(json!({
                "age": 60,
                "gender": "M",
                "creatinine": 100,
                "lvef": 50,
                "nyha": 2,
                "urgency": "soon"
            })),
            None,
        )
        .unwrap_err();

    assert!(err.is_validation());
    match err {
        ScoreError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "urgency"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn euroscore2_salvage_case_is_high_risk() {
    let result = compute(
        ScoreType::EuroScore2,
        json!({
            "age": 80,
            "gender": "F",
            "creatinine": 300,
            "lvef": 15,
            "nyha": 4,
            "urgency": "salvage",
            "diabetes": true,
            "pulmonaryPressure": 60,
            "weightOfIntervention": "triple",
            "previousCardiacSurgery": true,
            "criticalPreoperativeState": true,
            "activeEndocarditis": true,
            "chronicLungDisease": true
        }),
    );

    assert!(result.score > 90.0);
    assert_eq!(result.risk_level, RiskLevel::label("Élevé"));
    assert_eq!(result.interpretation, "Risque élevé");
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(&["Discussion en réunion médico-chirurgicale".to_string()][..])
    );
}

fn grace_score(value: serde_json::Value) -> f64 {
    compute(ScoreType::Grace, value).score
}

#[test]
fn grace_reference_acs_case() {
    let result = compute(
        ScoreType::Grace,
        json!({
            "age": 65,
            "heartRate": 80,
            "systolicBP": 130,
            "creatinine": 1.2,
            "killipClass": 1,
            "elevatedCardiacMarkers": true,
            "stSegmentDeviation": true
        }),
    );

    // 58 + 9 + 34 + 10 + 0 + 14 + 28
    assert_eq!(result.score, 153.0);
    assert_eq!(result.reliability, 100.0);
    assert_eq!(
        result.risk_level,
        RiskLevel::detailed("Élevé", "Risque de mortalité >3%")
    );
    assert_eq!(result.interpretation, "Risque élevé de mortalité (>3%)");
    assert_eq!(result.mortality_6_month, Some(0.38));

    let insight = &result.insights[0];
    assert_eq!(insight.kind, InsightKind::Clinical);
    assert_eq!(insight.category.as_deref(), Some("Risque"));
    assert_eq!(insight.message, result.interpretation);
    assert_eq!(
        insight.recommendations.as_deref(),
        Some(&["Coronarographie urgente".to_string(), "Surveillance USI".to_string()][..])
    );
}

#[test]
fn grace_band_boundaries_are_half_open() {
    assert_eq!(grace_score(json!({"age": 29})), 0.0);
    assert_eq!(grace_score(json!({"age": 89})), 91.0);
    assert_eq!(grace_score(json!({"age": 90})), 100.0);
    assert_eq!(grace_score(json!({"systolicBP": 80})), 53.0);
    assert_eq!(grace_score(json!({"systolicBP": 200})), 0.0);
    assert_eq!(grace_score(json!({"heartRate": 110})), 24.0);
    assert_eq!(grace_score(json!({"creatinine": 0.4})), 4.0);
    assert_eq!(grace_score(json!({"creatinine": 2.0})), 21.0);
}

#[test]
fn grace_killip_class_and_arrest_points() {
    assert_eq!(
        grace_score(json!({"killipClass": 4, "cardiacArrest": true})),
        98.0
    );
}

#[test]
fn grace_high_band_starts_at_its_floor() {
    let result = compute(
        ScoreType::Grace,
        json!({
            "age": 80,
            "heartRate": 110,
            "systolicBP": 140,
            "creatinine": 0.0,
            "killipClass": 1
        }),
    );

    // 91 + 24 + 24 + 1: exactly on the high-risk floor.
    assert_eq!(result.score, 140.0);
    assert_eq!(result.risk_level.level(), "Élevé");
}

#[test]
fn grace_intermediate_band_recommendations() {
    let result = compute(
        ScoreType::Grace,
        json!({
            "age": 60,
            "heartRate": 90,
            "systolicBP": 100,
            "creatinine": 0.0,
            "killipClass": 1
        }),
    );

    assert_eq!(result.score, 117.0);
    assert_eq!(
        result.risk_level,
        RiskLevel::detailed("Intermédiaire", "Risque de mortalité 1-3%")
    );
    assert_eq!(result.mortality_6_month, Some(0.3));
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(&["Coronarographie dans les 24h".to_string()][..])
    );
}

#[test]
fn timi_without_subtype_is_rejected() {
    let err = calculator_for(ScoreType::Timi)
        .compute(&ParamSet::new(), None)
        .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, ScoreError::SubtypeRequired));
}

#[test]
fn timi_subtype_is_case_sensitive() {
    let err = calculator_for(ScoreType::Timi)
        .compute(&ParamSet::new(), Some("stemi"))
        .unwrap_err();

    match err {
        ScoreError::UnknownSubtype(subtype) => assert_eq!(subtype, "stemi"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn timi_stemi_empty_params_scores_zero() {
    let result = calculator_for(ScoreType::Timi)
        .compute(&ParamSet::new(), Some("STEMI"))
        .expect("empty parameter set is not an error");

    assert_eq!(result.score, 0.0);
    assert_eq!(result.score_name, "TIMI STEMI");
    assert_eq!(result.reliability, 100.0);
    assert!(result.missing_parameters.is_empty());
    assert_eq!(
        result.risk_level,
        RiskLevel::detailed("Faible", "Mortalité à 30 jours ~2%")
    );
    assert_eq!(result.interpretation, "Risque faible (mortalité ~2%)");
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(&["Stratégie de reperfusion selon protocole".to_string()][..])
    );
}

fn stemi_score(value: serde_json::Value) -> f64 {
    calculator_for(ScoreType::Timi)
        .compute(&params(value), Some("STEMI"))
        .expect("calculation succeeds")
        .score
}

fn nstemi_score(value: serde_json::Value) -> f64 {
    calculator_for(ScoreType::Timi)
        .compute(&params(value), Some("NSTEMI"))
        .expect("calculation succeeds")
        .score
}

#[test]
fn timi_stemi_thresholds_are_strict() {
    // Values sitting exactly on a threshold earn nothing.
    assert_eq!(
        stemi_score(json!({
            "age": 64,
            "systolicBP": 100,
            "heartRate": 100,
            "killipClass": 1,
            "weight": 67,
            "timeToTreatment": 4
        })),
        0.0
    );

    assert_eq!(stemi_score(json!({"age": 74})), 2.0);
    assert_eq!(stemi_score(json!({"age": 75})), 3.0);
    assert_eq!(stemi_score(json!({"systolicBP": 99})), 3.0);
    assert_eq!(stemi_score(json!({"heartRate": 101})), 2.0);
    assert_eq!(stemi_score(json!({"killipClass": 2})), 2.0);
    assert_eq!(stemi_score(json!({"weight": 66})), 1.0);
    assert_eq!(stemi_score(json!({"timeToTreatment": 5})), 1.0);
}

#[test]
fn timi_stemi_combined_criteria_count_once() {
    assert_eq!(
        stemi_score(json!({"diabetes": true, "hypertension": true, "angina": true})),
        1.0
    );
    assert_eq!(
        stemi_score(json!({"anteriorSTEMI": true, "lbbb": true})),
        1.0
    );
}

#[test]
fn timi_stemi_high_risk_case() {
    let result = calculator_for(ScoreType::Timi)
        .compute(
            &params(json!({
                "age": 76,
                "systolicBP": 95,
                "heartRate": 110,
                "killipClass": 3,
                "weight": 60,
                "anteriorSTEMI": true,
                "diabetes": true,
                "timeToTreatment": 6
            })),
            Some("STEMI"),
        )
        .expect("calculation succeeds");

    // 3 + 3 + 2 + 2 + 1 + 1 + 1 + 1
    assert_eq!(result.score, 14.0);
    assert_eq!(result.risk_level.level(), "Élevé");
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(
            &[
                "Angioplastie primaire urgente".to_string(),
                "Monitoring continu".to_string()
            ][..]
        )
    );
}

#[test]
fn timi_nstemi_all_criteria_score_seven() {
    let result = calculator_for(ScoreType::Timi)
        .compute(
            &params(json!({
                "age": 70,
                "riskFactorsCount": 3,
                "knownCAD": true,
                "noAspirinLast7Days": true,
                "severeAngina": true,
                "stDeviation": true,
                "elevatedMarkers": true
            })),
            Some("NSTEMI"),
        )
        .expect("calculation succeeds");

    assert_eq!(result.score, 7.0);
    assert_eq!(result.score_name, "TIMI NSTEMI");
    assert_eq!(
        result.risk_level,
        RiskLevel::detailed("Élevé", "Événements à 14 jours ~20%")
    );
    assert_eq!(result.interpretation, "Risque élevé (événements à 14j: ~20%)");
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(&["Stratégie invasive précoce (<24h)".to_string()][..])
    );
}

#[test]
fn timi_nstemi_criterion_thresholds() {
    assert_eq!(nstemi_score(json!({"age": 64})), 0.0);
    assert_eq!(nstemi_score(json!({"age": 65})), 1.0);
    assert_eq!(nstemi_score(json!({"riskFactorsCount": 2})), 0.0);
    assert_eq!(nstemi_score(json!({"riskFactorsCount": 3})), 1.0);
}

#[test]
fn cha2ds2vasc_worked_example_scores_seven() {
    let result = compute(
        ScoreType::Cha2ds2Vasc,
        json!({
            "age": 76,
            "gender": "F",
            "congestiveHeartFailure": true,
            "hypertension": true,
            "diabetes": false,
            "stroke": true,
            "vascularDisease": false
        }),
    );

    // 2 (age) + 1 (female) + 1 (CHF) + 1 (hypertension) + 2 (stroke)
    assert_eq!(result.score, 7.0);
    assert_eq!(result.reliability, 100.0);
    assert_eq!(result.annual_stroke_risk, Some(9.6));
    assert_eq!(
        result.recommendation.as_deref(),
        Some("Anticoagulation recommandée")
    );
    assert_eq!(result.risk_level, RiskLevel::label("Élevé"));
    assert_eq!(result.interpretation, "Risque élevé d'AVC");

    let insight = &result.insights[0];
    assert_eq!(insight.category.as_deref(), Some("Anticoagulation"));
    assert_eq!(insight.message, "Risque élevé - Anticoagulation recommandée");
    assert_eq!(
        insight.recommendations.as_ref().map(Vec::len),
        Some(3)
    );
}

#[test]
fn cha2ds2vasc_age_bands_are_exclusive() {
    let base = json!({
        "gender": "M",
        "congestiveHeartFailure": false,
        "hypertension": false,
        "diabetes": false,
        "stroke": false,
        "vascularDisease": false
    });

    let mut below = base.clone();
    below["age"] = json!(64);
    let mut lower_band = base.clone();
    lower_band["age"] = json!(65);
    let mut upper_band = base;
    upper_band["age"] = json!(75);

    assert_eq!(compute(ScoreType::Cha2ds2Vasc, below).score, 0.0);
    assert_eq!(compute(ScoreType::Cha2ds2Vasc, lower_band).score, 1.0);
    assert_eq!(compute(ScoreType::Cha2ds2Vasc, upper_band).score, 2.0);
}

#[test]
fn cha2ds2vasc_maximum_score_reads_last_risk_entry() {
    let result = compute(
        ScoreType::Cha2ds2Vasc,
        json!({
            "age": 80,
            "gender": "F",
            "congestiveHeartFailure": true,
            "hypertension": true,
            "diabetes": true,
            "stroke": true,
            "vascularDisease": true
        }),
    );

    assert_eq!(result.score, 9.0);
    assert_eq!(result.annual_stroke_risk, Some(15.2));
}

#[test]
fn cha2ds2vasc_zero_score_needs_no_anticoagulation() {
    let result = compute(
        ScoreType::Cha2ds2Vasc,
        json!({
            "age": 50,
            "gender": "M",
            "congestiveHeartFailure": false,
            "hypertension": false,
            "diabetes": false,
            "stroke": false,
            "vascularDisease": false
        }),
    );

    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_level, RiskLevel::label("Très faible"));
    assert_eq!(
        result.recommendation.as_deref(),
        Some("Pas d'anticoagulation recommandée")
    );
    assert_eq!(
        result.insights[0].recommendations.as_deref(),
        Some(&["Réévaluation périodique du risque".to_string()][..])
    );
}
