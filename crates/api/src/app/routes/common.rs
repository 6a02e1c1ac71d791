use axum::http::StatusCode;

use canemart_auth::Role;
use canemart_core::RecordId;

use crate::app::errors;
use crate::context::SessionContext;

/// Reject the request unless the session acts in `required`.
pub fn require_role(
    ctx: &SessionContext,
    required: Role,
) -> Result<(), axum::response::Response> {
    if ctx.role() == required {
        Ok(())
    } else {
        Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("requires the {required} role"),
        ))
    }
}

pub fn parse_record_id(raw: &str) -> Result<RecordId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id")
    })
}
