use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use canemart_core::DomainError;
use canemart_grading::GradingError;
use canemart_infra::{PredictionError, StoreError};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Unauthorized => json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized"),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "record not found"),
        StoreError::Domain(e) => domain_error_to_response(e),
        StoreError::Backend(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

/// Prediction failures surface as a gateway problem with the upstream status
/// embedded, matching the client's "API error: {status}" message.
pub fn prediction_error_to_response(err: PredictionError) -> axum::response::Response {
    match err {
        PredictionError::Api { .. } => {
            json_error(StatusCode::BAD_GATEWAY, "prediction_failed", err.to_string())
        }
        PredictionError::Network(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "prediction_unreachable", msg)
        }
        PredictionError::Decode(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "prediction_undecodable", msg)
        }
    }
}

pub fn grading_error_to_response(err: GradingError) -> axum::response::Response {
    match err {
        GradingError::Schema(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "prediction_schema", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
