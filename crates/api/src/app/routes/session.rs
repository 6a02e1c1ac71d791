use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use canemart_auth::ExternalIdentity;
use canemart_core::UserId;

use crate::app::{dto, services::AppServices};
use crate::context::SessionContext;

/// Identity-provider callback: the provider has already verified the user;
/// we mint a session for the asserted identity. Unauthenticated by design
/// (there is no token yet).
pub async fn sign_in(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignInRequest>,
) -> impl IntoResponse {
    let identity = ExternalIdentity {
        user_id: body.user_id.unwrap_or_else(UserId::new),
        display_name: body.display_name,
        role: body.role,
    };

    let token = services.sessions.sign_in(identity);

    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "token": token.to_string() })),
    )
}

/// Sign out: drop the session and everything scoped to it.
pub async fn sign_out(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> StatusCode {
    let token = session.token();
    services.sessions.sign_out(token);
    services.end_session(token);
    StatusCode::NO_CONTENT
}
