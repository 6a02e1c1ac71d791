use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use canemart_auth::Role;
use canemart_products::{MillProduct, NewMillProduct};

use crate::app::routes::common;
use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(my_products))
        .route("/:id/status", post(update_status))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Mill) {
        return resp;
    }

    let product = match MillProduct::create(
        NewMillProduct {
            product_name: body.product_name,
            product_type: body.product_type,
            quantity: body.quantity,
            price: body.price,
            sugar_content: body.sugar_content,
            package_size: body.package_size,
            description: body.description,
            origin: body.origin,
            image: body.image,
            unit: body.unit,
        },
        session.user_id(),
        session.owner_name(),
        Utc::now(),
    ) {
        Ok(product) => product,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let id = product.id();
    if let Err(e) = services.store.insert_product(product).await {
        return errors::store_error_to_response(e);
    }

    tracing::info!(%id, "product created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn my_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Mill) {
        return resp;
    }

    match services.store.products_by_owner(session.user_id()).await {
        Ok(products) => Json(
            products
                .iter()
                .map(dto::ProductResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductStatusRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Mill) {
        return resp;
    }

    let id = match common::parse_record_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store.update_product_status(id, body.status).await {
        Ok(product) => Json(dto::ProductResponse::from(&product)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
