use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use acuity_api::state::AppState;
use acuity_engine::{Engine, EngineConfig};
use acuity_insights::{InsightGenerator, OpenAiGenerator};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let filter = EnvFilter::from_default_env();
    let json_logs = env::var("ACUITY_LOG_JSON")
        .is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));
    if json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let host = env::var("ACUITY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("ACUITY_PORT").unwrap_or_else(|_| "3000".to_string());

    let generator = OpenAiGenerator::from_env();
    if !generator.enabled() {
        warn!("OPENAI_API_KEY not set, every result will carry the local fallback insight");
    }
    let engine = Engine::new(EngineConfig::from_env(), generator);
    let app = acuity_api::router(AppState {
        engine: Arc::new(engine),
    });

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
