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
use canemart_listings::{BuyerInfo, CaneListing, NewCaneListing};

use crate::app::routes::common;
use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_listing).get(my_listings))
        .route("/:id/status", post(update_status))
}

pub async fn create_listing(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::CreateListingRequest>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Farmer) {
        return resp;
    }

    let listing = match CaneListing::create(
        NewCaneListing {
            variety: body.variety,
            quantity: body.quantity,
            price: body.price,
            quality: body.quality,
            harvest_date: body.harvest_date,
            description: body.description,
            location: body.location,
            image: body.image,
        },
        session.user_id(),
        session.owner_name(),
        Utc::now(),
    ) {
        Ok(listing) => listing,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let id = listing.id();
    if let Err(e) = services.store.insert_listing(listing).await {
        return errors::store_error_to_response(e);
    }

    tracing::info!(%id, "listing created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn my_listings(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    if let Err(resp) = common::require_role(&session, Role::Farmer) {
        return resp;
    }

    match services.store.listings_by_owner(session.user_id()).await {
        Ok(listings) => Json(
            listings
                .iter()
                .map(dto::ListingResponse::from)
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
    Json(body): Json<dto::UpdateListingStatusRequest>,
) -> axum::response::Response {
    let id = match common::parse_record_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // Farmers advance their own pipeline; a customer purchase lands the
    // completing transition with buyer info attached.
    let buyer_info = match (body.buyer, body.revenue) {
        (Some(buyer), Some(revenue)) => Some(BuyerInfo { buyer, revenue }),
        (None, None) => None,
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "buyer and revenue must be provided together",
            );
        }
    };

    match services
        .store
        .update_listing_status(id, body.status, buyer_info)
        .await
    {
        Ok(listing) => Json(dto::ListingResponse::from(&listing)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
