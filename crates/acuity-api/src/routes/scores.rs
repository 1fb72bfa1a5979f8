use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use acuity_core::models::request::ScoreRequest;
use acuity_core::models::result::ScoreResult;
use acuity_core::score_type::ScoreType;
use acuity_insights::InsightGenerator;
use acuity_scores::calculator_for;
use acuity_scores::schema::ParamSpec;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScoreSummary {
    id: String,
    name: String,
}

#[derive(Serialize)]
pub struct ScoreParameters {
    id: String,
    name: String,
    parameters: Vec<ParamSpec>,
}

/// `{status: "success", data}` success envelope of the deployed contract.
#[derive(Serialize)]
pub struct SuccessBody<T> {
    status: &'static str,
    data: T,
}

impl<T> SuccessBody<T> {
    fn new(data: T) -> Self {
        SuccessBody {
            status: "success",
            data,
        }
    }
}

pub async fn list_scores() -> Json<Vec<ScoreSummary>> {
    let scores: Vec<ScoreSummary> = ScoreType::ALL
        .into_iter()
        .map(|score_type| ScoreSummary {
            id: score_type.id().to_string(),
            name: score_type.display_name().to_string(),
        })
        .collect();
    Json(scores)
}

pub async fn score_parameters(
    Path(id): Path<String>,
) -> Result<Json<ScoreParameters>, ApiError> {
    let score_type = ScoreType::from_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown score type: {id}")))?;
    let calculator = calculator_for(score_type);

    Ok(Json(ScoreParameters {
        id: score_type.id().to_string(),
        name: score_type.display_name().to_string(),
        parameters: calculator.parameters().to_vec(),
    }))
}

/// Validates the submitted parameters against the calculator's
/// declarations, then computes and enriches. Reliability accounting owns
/// absent parameters; only present-but-unusable values reject here.
pub async fn calculate<G: InsightGenerator + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<SuccessBody<ScoreResult>>, ApiError> {
    let score_type: ScoreType = request
        .score_type
        .parse()
        .map_err(|_| ApiError::UnsupportedType)?;

    let issues =
        calculator_for(score_type).validate_params(&request.params, request.subtype.as_deref());
    if let Some(issue) = issues.into_iter().next() {
        return Err(ApiError::BadRequest(issue.message));
    }

    let result = state.engine.compute(&request).await?;
    Ok(Json(SuccessBody::new(result)))
}
