//! In-memory document store for dev/tests.
//!
//! Stands in for the hosted document database. Same ordering contract:
//! list reads are newest first.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use canemart_core::{RecordId, UserId};
use canemart_listings::{BuyerInfo, CaneListing, ListingStatus};
use canemart_products::{MillProduct, ProductStatus};

use super::{DocumentStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    listings: RwLock<HashMap<RecordId, CaneListing>>,
    products: RwLock<HashMap<RecordId, MillProduct>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_listing(&self, listing: CaneListing) -> Result<(), StoreError> {
        let mut map = self.listings.write().map_err(|_| poisoned())?;
        map.insert(listing.id(), listing);
        Ok(())
    }

    async fn listing(&self, id: RecordId) -> Result<Option<CaneListing>, StoreError> {
        let map = self.listings.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn listings_by_owner(&self, farmer_id: UserId) -> Result<Vec<CaneListing>, StoreError> {
        let map = self.listings.read().map_err(|_| poisoned())?;
        let mut out: Vec<CaneListing> = map
            .values()
            .filter(|l| l.farmer_id() == farmer_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(out)
    }

    async fn available_listings(&self) -> Result<Vec<CaneListing>, StoreError> {
        let map = self.listings.read().map_err(|_| poisoned())?;
        let mut out: Vec<CaneListing> = map
            .values()
            .filter(|l| l.status().is_available())
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(out)
    }

    async fn update_listing_status(
        &self,
        id: RecordId,
        status: ListingStatus,
        buyer_info: Option<BuyerInfo>,
    ) -> Result<CaneListing, StoreError> {
        let mut map = self.listings.write().map_err(|_| poisoned())?;
        let listing = map.get_mut(&id).ok_or(StoreError::NotFound)?;
        listing.advance_status(status, buyer_info)?;
        Ok(listing.clone())
    }

    async fn insert_product(&self, product: MillProduct) -> Result<(), StoreError> {
        let mut map = self.products.write().map_err(|_| poisoned())?;
        map.insert(product.id(), product);
        Ok(())
    }

    async fn product(&self, id: RecordId) -> Result<Option<MillProduct>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn products_by_owner(&self, producer_id: UserId) -> Result<Vec<MillProduct>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        let mut out: Vec<MillProduct> = map
            .values()
            .filter(|p| p.producer_id() == producer_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(out)
    }

    async fn available_products(&self) -> Result<Vec<MillProduct>, StoreError> {
        let map = self.products.read().map_err(|_| poisoned())?;
        let mut out: Vec<MillProduct> = map
            .values()
            .filter(|p| p.status().is_available())
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(out)
    }

    async fn update_product_status(
        &self,
        id: RecordId,
        status: ProductStatus,
    ) -> Result<MillProduct, StoreError> {
        let mut map = self.products.write().map_err(|_| poisoned())?;
        let product = map.get_mut(&id).ok_or(StoreError::NotFound)?;
        product.update_status(status)?;
        Ok(product.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use canemart_core::QualityGrade;
    use canemart_listings::NewCaneListing;
    use canemart_products::{NewMillProduct, ProductType};

    fn listing_at(farmer_id: UserId, variety: &str, offset_secs: i64) -> CaneListing {
        CaneListing::create(
            NewCaneListing {
                variety: variety.to_string(),
                quantity: "100 tons".to_string(),
                price: "₹2,650/ton".to_string(),
                quality: QualityGrade::Standard,
                harvest_date: "2025-03-01".to_string(),
                description: None,
                location: None,
                image: None,
            },
            farmer_id,
            "farmer",
            Utc::now() + Duration::seconds(offset_secs),
        )
        .unwrap()
    }

    fn product(producer_id: UserId) -> MillProduct {
        MillProduct::create(
            NewMillProduct {
                product_name: "White Sugar".to_string(),
                product_type: ProductType::White,
                quantity: "500 kg".to_string(),
                price: "₹45/kg".to_string(),
                sugar_content: "99.8%".to_string(),
                package_size: "50 kg".to_string(),
                description: None,
                origin: None,
                image: None,
                unit: None,
            },
            producer_id,
            "mill",
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn owner_listings_come_back_newest_first() {
        let store = InMemoryDocumentStore::new();
        let farmer = UserId::new();
        store
            .insert_listing(listing_at(farmer, "OLD-1", 0))
            .await
            .unwrap();
        store
            .insert_listing(listing_at(farmer, "NEW-1", 60))
            .await
            .unwrap();
        store
            .insert_listing(listing_at(UserId::new(), "OTHER", 120))
            .await
            .unwrap();

        let mine = store.listings_by_owner(farmer).await.unwrap();
        let varieties: Vec<&str> = mine.iter().map(|l| l.variety()).collect();
        assert_eq!(varieties, vec!["NEW-1", "OLD-1"]);
    }

    #[tokio::test]
    async fn available_listings_are_pending_only() {
        let store = InMemoryDocumentStore::new();
        let farmer = UserId::new();
        let listing = listing_at(farmer, "CO-86032", 0);
        let id = listing.id();
        store.insert_listing(listing).await.unwrap();
        assert_eq!(store.available_listings().await.unwrap().len(), 1);

        store
            .update_listing_status(id, ListingStatus::Processing, None)
            .await
            .unwrap();
        assert!(store.available_listings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn illegal_transition_surfaces_as_domain_error() {
        let store = InMemoryDocumentStore::new();
        let listing = listing_at(UserId::new(), "CO-86032", 0);
        let id = listing.id();
        store.insert_listing(listing).await.unwrap();

        let err = store
            .update_listing_status(id, ListingStatus::Completed, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));

        // And the record is untouched.
        let stored = store.listing(id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ListingStatus::Pending);
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let store = InMemoryDocumentStore::new();
        let err = store
            .update_product_status(RecordId::new(), ProductStatus::LowStock)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn product_availability_tracks_stock_status() {
        let store = InMemoryDocumentStore::new();
        let p = product(UserId::new());
        let id = p.id();
        store.insert_product(p).await.unwrap();

        store
            .update_product_status(id, ProductStatus::LowStock)
            .await
            .unwrap();
        assert_eq!(store.available_products().await.unwrap().len(), 1);

        store
            .update_product_status(id, ProductStatus::OutOfStock)
            .await
            .unwrap();
        assert!(store.available_products().await.unwrap().is_empty());
    }
}
