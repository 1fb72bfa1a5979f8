use acuity_core::models::ai::{AiResponse, AiSource, AiStatus};
use acuity_core::models::insight::{Insight, InsightKind};
use acuity_core::models::result::{RiskLevel, ScoreResult, SofaComponents};
use acuity_core::score_type::{ScoreType, TimiVariant};

#[test]
fn result_envelope_uses_contract_field_names() {
    let result = ScoreResult::new(
        "MELD",
        23.0,
        RiskLevel::label("élevé"),
        "Risque élevé - Mortalité à 3 mois environ 19.6%",
    );
    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().unwrap();

    for key in [
        "score",
        "reliability",
        "scoreName",
        "riskLevel",
        "interpretation",
        "missingParameters",
        "insights",
        "responseTime",
    ] {
        assert!(obj.contains_key(key), "missing field {key}");
    }
}

#[test]
fn absent_extras_are_omitted() {
    let result = ScoreResult::new("GRACE", 120.0, RiskLevel::label("intermédiaire"), "…");
    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().unwrap();

    for key in [
        "classification",
        "annualStrokeRisk",
        "recommendation",
        "mortality6Month",
        "qsofa",
        "sofa",
        "sofaComponents",
        "aiResponse",
    ] {
        assert!(!obj.contains_key(key), "unexpected field {key}");
    }
}

#[test]
fn populated_extras_serialize_under_contract_names() {
    let mut result = ScoreResult::new("GRACE", 152.0, RiskLevel::label("élevé"), "…");
    result.mortality_6_month = Some(0.38);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["mortality6Month"], 0.38);

    let mut result = ScoreResult::new("Sepsis (qSOFA/SOFA)", 0.62, RiskLevel::label("élevé"), "…");
    result.qsofa = Some(2);
    result.sofa = Some(6);
    result.sofa_components = Some(SofaComponents {
        respiratory: 2,
        coagulation: 1,
        hepatic: 0,
        cardiovascular: 1,
        neurological: 1,
        renal: 1,
    });
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["qsofa"], 2);
    assert_eq!(json["sofa"], 6);
    assert_eq!(json["sofaComponents"]["cardiovascular"], 1);
}

#[test]
fn risk_level_serializes_as_string_or_object() {
    let label = RiskLevel::label("faible");
    assert_eq!(serde_json::to_value(&label).unwrap(), "faible");

    let detailed = RiskLevel::detailed("élevé", "Mortalité >3%");
    let json = serde_json::to_value(&detailed).unwrap();
    assert_eq!(json["level"], "élevé");
    assert_eq!(json["description"], "Mortalité >3%");

    let parsed: RiskLevel = serde_json::from_str("\"faible\"").unwrap();
    assert_eq!(parsed.level(), "faible");
    let parsed: RiskLevel =
        serde_json::from_str(r#"{"level": "élevé", "description": "Mortalité >3%"}"#).unwrap();
    assert_eq!(parsed.level(), "élevé");
}

#[test]
fn insight_kind_serializes_lowercase_under_type() {
    let insight = Insight::new(InsightKind::Warning, "Score incomplet");
    let json = serde_json::to_value(&insight).unwrap();
    assert_eq!(json["type"], "warning");
    assert_eq!(json["message"], "Score incomplet");
    assert!(json.get("category").is_none());
    assert!(json.get("implications").is_none());
}

#[test]
fn ai_response_omits_fallback_reason_on_success() {
    let ai = AiResponse {
        enabled: true,
        source: AiSource::Openai,
        status: AiStatus::Success,
        fallback_reason: None,
        raw: None,
    };
    let json = serde_json::to_value(&ai).unwrap();
    assert_eq!(json["enabled"], true);
    assert_eq!(json["source"], "openai");
    assert_eq!(json["status"], "success");
    assert!(json.get("fallbackReason").is_none());

    let ai = AiResponse {
        enabled: true,
        source: AiSource::Local,
        status: AiStatus::Fallback,
        fallback_reason: Some("Timeout".to_string()),
        raw: None,
    };
    let json = serde_json::to_value(&ai).unwrap();
    assert_eq!(json["source"], "local");
    assert_eq!(json["status"], "fallback");
    assert_eq!(json["fallbackReason"], "Timeout");
}

#[test]
fn score_type_round_trips_through_ids() {
    for score_type in ScoreType::ALL {
        assert_eq!(ScoreType::from_id(score_type.id()), Some(score_type));
        assert_eq!(score_type.id().parse::<ScoreType>().unwrap(), score_type);
    }
    assert_eq!(ScoreType::from_id("apache2"), None);
    assert!("apache2".parse::<ScoreType>().is_err());
}

#[test]
fn timi_variant_parses_exact_uppercase_only() {
    assert_eq!(TimiVariant::from_subtype("STEMI"), Some(TimiVariant::Stemi));
    assert_eq!(TimiVariant::from_subtype("NSTEMI"), Some(TimiVariant::Nstemi));
    assert_eq!(TimiVariant::from_subtype("stemi"), None);
    assert_eq!(TimiVariant::from_subtype(""), None);
}
