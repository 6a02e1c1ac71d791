use serde::{Deserialize, Serialize};

use canemart_auth::Role;
use canemart_core::UserId;
use canemart_listings::{CaneListing, ListingStatus};
use canemart_products::{MillProduct, ProductStatus, ProductType};

// -------------------------
// Request DTOs
// -------------------------

/// What the external identity provider's callback hands us.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub user_id: Option<UserId>,
    pub display_name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    pub variety: String,
    pub quantity: String,
    pub price: String,
    pub quality: canemart_core::QualityGrade,
    pub harvest_date: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListingStatusRequest {
    pub status: ListingStatus,
    pub buyer: Option<String>,
    pub revenue: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: String,
    pub price: String,
    pub sugar_content: String,
    pub package_size: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub image: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductStatusRequest {
    pub status: ProductStatus,
}

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetCartQuantityRequest {
    pub quantity: u32,
}

/// Catalog query string. Everything is optional; defaults mirror the
/// customer dashboard's initial view.
#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub id: String,
    pub variety: String,
    pub quantity: String,
    pub price: String,
    pub quality: String,
    pub harvest_date: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: ListingStatus,
    pub farmer: String,
    pub buyer: Option<String>,
    pub revenue: Option<u64>,
}

impl From<&CaneListing> for ListingResponse {
    fn from(listing: &CaneListing) -> Self {
        Self {
            id: listing.id().to_string(),
            variety: listing.variety().to_string(),
            quantity: listing.quantity().to_string(),
            price: listing.price().to_string(),
            quality: listing.quality().to_string(),
            harvest_date: listing.harvest_date().to_string(),
            description: listing.description().map(str::to_string),
            location: listing.location().map(str::to_string),
            status: listing.status(),
            farmer: listing.farmer().to_string(),
            buyer: listing.buyer().map(str::to_string),
            revenue: listing.revenue(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: String,
    pub price: String,
    pub sugar_content: String,
    pub package_size: String,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub unit: Option<String>,
    pub status: ProductStatus,
    pub producer: String,
}

impl From<&MillProduct> for ProductResponse {
    fn from(product: &MillProduct) -> Self {
        Self {
            id: product.id().to_string(),
            product_name: product.product_name().to_string(),
            product_type: product.product_type(),
            quantity: product.quantity().to_string(),
            price: product.price().to_string(),
            sugar_content: product.sugar_content().to_string(),
            package_size: product.package_size().to_string(),
            description: product.description().map(str::to_string),
            origin: product.origin().map(str::to_string),
            unit: product.unit().map(str::to_string),
            status: product.status(),
            producer: product.producer().to_string(),
        }
    }
}
