use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    Extension(session): Extension<crate::context::SessionContext>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": session.user_id().to_string(),
        "name": session.owner_name(),
        "role": session.role().as_str(),
    }))
}
