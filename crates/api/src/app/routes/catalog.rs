use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use canemart_catalog::{pipeline, CatalogQuery, Category, SortOrder, TypeFilter};

use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

/// The customer catalog view: category partition, text search, exact type
/// filter, sort, fixed-size page.
pub async fn browse(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<dto::CatalogParams>,
) -> axum::response::Response {
    let category = match params.category.as_deref().unwrap_or("sugarcane") {
        "sugarcane" => Category::Sugarcane,
        "sugar" => Category::Sugar,
        other => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_category",
                format!("unknown category {other:?}; expected sugarcane or sugar"),
            );
        }
    };

    let mut query = CatalogQuery::new(category);
    if let Some(q) = params.q {
        query.search = q;
    }
    if let Some(t) = params.type_filter {
        query.type_filter = TypeFilter::from_param(&t);
    }
    if let Some(sort) = params.sort {
        query.sort = SortOrder::from_key(&sort);
    }
    if let Some(page) = params.page {
        query.page = page;
    }

    let items = match services.catalog_items(session.token()).await {
        Ok(items) => items,
        Err(e) => return errors::store_error_to_response(e),
    };

    Json(pipeline::run(&items, &query)).into_response()
}
