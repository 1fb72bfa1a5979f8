//! Route-level behavior through the assembled router.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use acuity_api::state::AppState;
use acuity_engine::{Engine, EngineConfig};
use acuity_insights::DisabledGenerator;

fn build_router() -> axum::Router {
    let engine = Engine::new(EngineConfig::default(), DisabledGenerator);
    acuity_api::router(AppState {
        engine: Arc::new(engine),
    })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn post_calculate(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/scores/calculate")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialize")))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn health_reports_ok() {
    let response = build_router().oneshot(get("/health")).await.expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    assert_eq!(payload, json!({ "status": "ok" }));
}

#[tokio::test]
async fn catalog_lists_the_nine_scores() {
    let response = build_router().oneshot(get("/scores")).await.expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    let scores = payload.as_array().expect("array");
    assert_eq!(scores.len(), 9);
    assert_eq!(
        scores[0],
        json!({ "id": "euroscore2", "name": "EuroSCORE II" })
    );
    assert!(scores.contains(&json!({ "id": "blatchford", "name": "Glasgow-Blatchford" })));
}

#[tokio::test]
async fn parameters_route_returns_declared_specs() {
    let response = build_router()
        .oneshot(get("/scores/meld/parameters"))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    assert_eq!(payload["id"], json!("meld"));
    assert_eq!(payload["name"], json!("MELD"));

    let parameters = payload["parameters"].as_array().expect("parameters");
    let names: Vec<&str> = parameters
        .iter()
        .map(|spec| spec["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["creatinine", "bilirubin", "inr"]);
    assert!(parameters.iter().all(|spec| spec["required"] == json!(true)));
    assert!(parameters.iter().all(|spec| spec["kind"] == json!("number")));
}

#[tokio::test]
async fn parameters_route_rejects_unknown_id() {
    let response = build_router()
        .oneshot(get("/scores/apgar/parameters"))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = json_body(response).await;
    assert_eq!(payload["status"], json!("error"));
    assert!(payload["message"].as_str().expect("message").contains("apgar"));
}

#[tokio::test]
async fn calculate_returns_the_success_envelope() {
    let body = json!({
        "scoreType": "meld",
        "params": { "creatinine": 1.2, "bilirubin": 2.5, "inr": 1.5 }
    });
    let response = build_router()
        .oneshot(post_calculate(&body))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    assert_eq!(payload["status"], json!("success"));

    let data = &payload["data"];
    assert_eq!(data["score"].as_f64(), Some(16.0));
    assert_eq!(data["scoreName"], json!("MELD"));
    assert_eq!(data["riskLevel"], json!("Modéré"));
    assert_eq!(data["reliability"].as_f64(), Some(100.0));
    assert_eq!(data["aiResponse"]["status"], json!("fallback"));
    assert_eq!(data["aiResponse"]["fallbackReason"], json!("disabled"));
    assert!(data["responseTime"].is_u64());
}

#[tokio::test]
async fn calculate_rejects_unknown_score_type_with_the_fixed_message() {
    let body = json!({ "scoreType": "apache2", "params": {} });
    let response = build_router()
        .oneshot(post_calculate(&body))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = json_body(response).await;
    assert_eq!(
        payload,
        json!({ "status": "error", "message": "Type de score non supporté" })
    );
}

#[tokio::test]
async fn calculate_rejects_unusable_parameters() {
    let body = json!({
        "scoreType": "meld",
        "params": { "creatinine": "high", "bilirubin": 2.5, "inr": 1.5 }
    });
    let response = build_router()
        .oneshot(post_calculate(&body))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = json_body(response).await;
    assert_eq!(payload["status"], json!("error"));
    assert!(
        payload["message"]
            .as_str()
            .expect("message")
            .contains("creatinine")
    );
}

#[tokio::test]
async fn calculate_rejects_timi_without_subtype() {
    let body = json!({ "scoreType": "timi", "params": {} });
    let response = build_router()
        .oneshot(post_calculate(&body))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = json_body(response).await;
    assert!(payload["message"].as_str().expect("message").contains("subtype"));
}

#[tokio::test]
async fn calculate_dispatches_timi_with_the_legacy_type_field() {
    let body = json!({ "scoreType": "timi", "type": "NSTEMI", "params": {} });
    let response = build_router()
        .oneshot(post_calculate(&body))
        .await
        .expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = json_body(response).await;
    assert_eq!(payload["data"]["scoreName"], json!("TIMI NSTEMI"));
    assert_eq!(payload["data"]["score"].as_f64(), Some(0.0));
}
