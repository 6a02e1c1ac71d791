use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use canemart_auth::SessionRegistry;
use canemart_core::SessionToken;

use crate::context::SessionContext;

pub const SESSION_HEADER: &str = "x-session-token";

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<SessionRegistry>,
}

/// Resolve `X-Session-Token` to a live session or reject with 401.
///
/// The web front-end redirected unauthenticated visitors to the identity
/// provider; at this boundary that is simply an auth failure.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_token(req.headers())?;

    let session = state
        .sessions
        .resolve(token)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(SessionContext::new(session));

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Result<SessionToken, StatusCode> {
    let header = headers
        .get(SESSION_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    header
        .trim()
        .parse()
        .map_err(|_| StatusCode::UNAUTHORIZED)
}
