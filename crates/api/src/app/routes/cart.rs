use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use canemart_auth::Role;
use canemart_cart::Cart;
use canemart_catalog::{normalize_one, RawRecord};

use crate::app::routes::common;
use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(view_cart))
        .route("/items", post(add_item))
        .route("/items/:id", put(set_quantity).delete(remove_item))
}

fn cart_body(cart: &Cart) -> serde_json::Value {
    serde_json::json!({
        "lines": cart.lines(),
        "total": cart.total(),
        "item_count": cart.item_count(),
    })
}

pub async fn view_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Customer) {
        return resp;
    }

    Json(services.with_cart(session.token(), |cart| cart_body(cart))).into_response()
}

/// Add one unit of a purchasable record. Name and unit price come from the
/// stored record, not the request body.
pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::AddCartItemRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Customer) {
        return resp;
    }

    let id = match common::parse_record_id(&body.id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let record = match lookup_record(&services, id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "no such catalog item");
        }
        Err(resp) => return resp,
    };

    let item = match normalize_one(&record, &mut rand::thread_rng()) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let payload = services.with_cart(session.token(), |cart| {
        cart.add(item.id, item.name.clone(), item.price);
        cart_body(cart)
    });
    (StatusCode::CREATED, Json(payload)).into_response()
}

pub async fn set_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetCartQuantityRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Customer) {
        return resp;
    }

    let id = match common::parse_record_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let payload = services.with_cart(session.token(), |cart| {
        cart.set_quantity(id, body.quantity);
        cart_body(cart)
    });
    Json(payload).into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Customer) {
        return resp;
    }

    let id = match common::parse_record_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let payload = services.with_cart(session.token(), |cart| {
        cart.remove(id);
        cart_body(cart)
    });
    Json(payload).into_response()
}

async fn lookup_record(
    services: &AppServices,
    id: canemart_core::RecordId,
) -> Result<Option<RawRecord>, axum::response::Response> {
    match services.store.listing(id).await {
        Ok(Some(listing)) => return Ok(Some(RawRecord::Cane(listing))),
        Ok(None) => {}
        Err(e) => return Err(errors::store_error_to_response(e)),
    }
    match services.store.product(id).await {
        Ok(Some(product)) => Ok(Some(RawRecord::Sugar(product))),
        Ok(None) => Ok(None),
        Err(e) => Err(errors::store_error_to_response(e)),
    }
}
