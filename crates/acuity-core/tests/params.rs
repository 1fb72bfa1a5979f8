use acuity_core::models::request::ScoreRequest;
use acuity_core::params::{ParamSet, ParamValue};

#[test]
fn null_entries_are_dropped_on_deserialize() {
    let set: ParamSet = serde_json::from_str(r#"{"age": 72, "creatinine": null}"#).unwrap();
    assert!(set.contains("age"));
    assert!(!set.contains("creatinine"));
    assert_eq!(set.len(), 1);
}

#[test]
fn falsy_values_are_present() {
    let set: ParamSet =
        serde_json::from_str(r#"{"stroke": false, "killipClass": 0, "note": ""}"#).unwrap();
    assert_eq!(set.flag("stroke"), Some(false));
    assert_eq!(set.number("killipClass"), Some(0.0));
    assert_eq!(set.text("note"), Some(""));
}

#[test]
fn accessors_are_kind_strict() {
    let set: ParamSet = serde_json::from_str(r#"{"age": 72, "diabetes": true}"#).unwrap();
    assert_eq!(set.number("age"), Some(72.0));
    assert_eq!(set.flag("age"), None);
    assert_eq!(set.flag("diabetes"), Some(true));
    assert_eq!(set.number("diabetes"), None);
    assert_eq!(set.number("absent"), None);
}

#[test]
fn untagged_values_keep_their_kind() {
    let set: ParamSet =
        serde_json::from_str(r#"{"age": 63.5, "vent": true, "urgency": "elective"}"#).unwrap();
    assert_eq!(set.get("age"), Some(&ParamValue::Number(63.5)));
    assert_eq!(set.get("vent"), Some(&ParamValue::Flag(true)));
    assert_eq!(
        set.get("urgency"),
        Some(&ParamValue::Text("elective".to_string()))
    );
}

#[test]
fn request_accepts_legacy_type_alias_for_subtype() {
    let req: ScoreRequest =
        serde_json::from_str(r#"{"scoreType": "timi", "type": "STEMI", "params": {}}"#).unwrap();
    assert_eq!(req.subtype.as_deref(), Some("STEMI"));

    let req: ScoreRequest =
        serde_json::from_str(r#"{"scoreType": "timi", "subtype": "NSTEMI", "params": {}}"#)
            .unwrap();
    assert_eq!(req.subtype.as_deref(), Some("NSTEMI"));
}

#[test]
fn request_params_default_to_empty() {
    let req: ScoreRequest = serde_json::from_str(r#"{"scoreType": "meld"}"#).unwrap();
    assert!(req.params.is_empty());
    assert!(req.subtype.is_none());
}
