use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use canemart_auth::Role;
use canemart_grading::{assess, PredictionReport};

use crate::app::routes::common;
use crate::app::{errors, services::AppServices};
use crate::context::SessionContext;

/// Upload a measurement file, get back a quality grade and a suggested
/// price. Farmer-only; the grade is advisory and nothing is persisted.
pub async fn predict(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    mut multipart: Multipart,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Farmer) {
        return resp;
    }

    let (file_name, bytes) = match read_file_part(&mut multipart).await {
        Ok(Some(part)) => part,
        Ok(None) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "missing_file",
                "expected a multipart part named \"file\"",
            );
        }
        Err(resp) => return resp,
    };

    let payload = match services.predictor.predict(&file_name, bytes).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "prediction call failed");
            return errors::prediction_error_to_response(e);
        }
    };

    let report = match PredictionReport::from_json(&payload) {
        Ok(report) => report,
        Err(e) => return errors::grading_error_to_response(e),
    };

    let assessment = match assess(&report, &mut rand::thread_rng()) {
        Ok(assessment) => assessment,
        Err(e) => return errors::grading_error_to_response(e),
    };

    Json(serde_json::json!({
        "grade": assessment.grade,
        "suggested_price": assessment.suggested_price,
        "metrics": report
            .metrics()
            .iter()
            .map(|(k, v)| serde_json::json!({ "name": k, "value": v }))
            .collect::<Vec<_>>(),
    }))
    .into_response()
}

async fn read_file_part(
    multipart: &mut Multipart,
) -> Result<Option<(String, Vec<u8>)>, axum::response::Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "malformed_multipart",
                    e.to_string(),
                ));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .unwrap_or("measurements.bin")
            .to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                return Err(errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "malformed_multipart",
                    e.to_string(),
                ));
            }
        };
        return Ok(Some((file_name, bytes)));
    }
}
