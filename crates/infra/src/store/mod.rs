//! Document store seam.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use canemart_core::{DomainError, RecordId, UserId};
use canemart_listings::{BuyerInfo, CaneListing, ListingStatus};
use canemart_products::{MillProduct, ProductStatus};

pub use in_memory::InMemoryDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The record does not exist.
    #[error("record not found")]
    NotFound,

    /// The requested mutation violated a domain rule.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing service failed (unreachable, poisoned, corrupt).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// The remote document database, as this system uses it.
///
/// Records are created and status-advanced, never deleted. List reads come
/// back ordered by creation time descending.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_listing(&self, listing: CaneListing) -> Result<(), StoreError>;

    async fn listing(&self, id: RecordId) -> Result<Option<CaneListing>, StoreError>;

    /// All listings owned by `farmer_id`, newest first.
    async fn listings_by_owner(&self, farmer_id: UserId) -> Result<Vec<CaneListing>, StoreError>;

    /// Listings customers may buy (status pending), newest first.
    async fn available_listings(&self) -> Result<Vec<CaneListing>, StoreError>;

    /// Advance a listing's status (domain transition rules apply) and return
    /// the updated record.
    async fn update_listing_status(
        &self,
        id: RecordId,
        status: ListingStatus,
        buyer_info: Option<BuyerInfo>,
    ) -> Result<CaneListing, StoreError>;

    async fn insert_product(&self, product: MillProduct) -> Result<(), StoreError>;

    async fn product(&self, id: RecordId) -> Result<Option<MillProduct>, StoreError>;

    /// All products owned by `producer_id`, newest first.
    async fn products_by_owner(&self, producer_id: UserId) -> Result<Vec<MillProduct>, StoreError>;

    /// Products customers may buy (in-stock or low-stock), newest first.
    async fn available_products(&self) -> Result<Vec<MillProduct>, StoreError>;

    async fn update_product_status(
        &self,
        id: RecordId,
        status: ProductStatus,
    ) -> Result<MillProduct, StoreError>;
}
