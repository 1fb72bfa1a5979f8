use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use acuity_engine::EngineError;

/// Unified API error type for all route handlers.
///
/// The body shape (`status`/`message`, `error` detail on 500s) and the
/// French messages are a deployed wire contract.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown score id on the calculate route; fixed client-facing message.
    UnsupportedType,
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::UnsupportedType => (
                StatusCode::BAD_REQUEST,
                "Type de score non supporté".to_string(),
                None,
            ),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur lors du calcul".to_string(),
                    Some(detail),
                )
            }
        };

        let body = ErrorBody {
            status: "error",
            message,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnsupportedScoreType(_) => ApiError::UnsupportedType,
            EngineError::Validation(inner) => ApiError::BadRequest(inner.to_string()),
            EngineError::Calculation(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}
