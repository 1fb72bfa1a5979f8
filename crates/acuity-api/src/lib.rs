//! acuity-api
//!
//! HTTP binding for the score engine: the health probe, the score
//! catalog, and the calculate route that runs validation, computation
//! and enrichment end to end.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use acuity_insights::InsightGenerator;

use state::AppState;

/// The assembled application router.
pub fn router<G: InsightGenerator + 'static>(state: AppState<G>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/scores", get(routes::scores::list_scores))
        .route(
            "/scores/{id}/parameters",
            get(routes::scores::score_parameters),
        )
        .route("/scores/calculate", post(routes::scores::calculate::<G>))
        .layer(cors)
        .with_state(state)
}
