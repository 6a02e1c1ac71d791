use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use canemart_auth::SessionRegistry;
use canemart_cart::Cart;
use canemart_catalog::{CatalogItem, RawRecord};
use canemart_core::SessionToken;
use canemart_infra::{
    DocumentStore, FetchSequencer, HttpPredictionClient, InMemoryDocumentStore, PredictionClient,
    StoreError,
};

/// Shared application services, wired once at startup and handed to every
/// handler via an `Extension` layer.
pub struct AppServices {
    pub store: Arc<dyn DocumentStore>,
    pub sessions: Arc<SessionRegistry>,
    pub predictor: Arc<dyn PredictionClient>,
    /// One cart per live session, dropped at sign-out.
    carts: Mutex<HashMap<SessionToken, Cart>>,
    /// Guards racing catalog fetches per session so an older, slower read
    /// never replaces a newer snapshot.
    fetches: FetchSequencer,
    snapshots: Mutex<HashMap<String, Vec<CatalogItem>>>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>, predictor: Arc<dyn PredictionClient>) -> Self {
        Self {
            store,
            sessions: Arc::new(SessionRegistry::new()),
            predictor,
            carts: Mutex::new(HashMap::new()),
            fetches: FetchSequencer::new(),
            snapshots: Mutex::new(HashMap::new()),
        }
    }

    /// Load every record a customer may buy, as raw tagged records.
    pub async fn purchasable_records(&self) -> Result<Vec<RawRecord>, StoreError> {
        let mut records: Vec<RawRecord> = self
            .store
            .available_listings()
            .await?
            .into_iter()
            .map(RawRecord::Cane)
            .collect();
        records.extend(
            self.store
                .available_products()
                .await?
                .into_iter()
                .map(RawRecord::Sugar),
        );
        Ok(records)
    }

    /// Fetch and normalize the purchasable catalog for one session.
    ///
    /// Racing fetches for the same session resolve last-issued-wins: a fetch
    /// that was superseded while in flight neither becomes the session's
    /// snapshot nor shadows a newer one that already landed.
    pub async fn catalog_items(
        &self,
        token: SessionToken,
    ) -> Result<Vec<CatalogItem>, StoreError> {
        let key = format!("catalog:{token}");
        let ticket = self.fetches.begin(&key);

        let records = self.purchasable_records().await?;
        let items = canemart_catalog::normalize(&records, &mut rand::thread_rng());

        if self.fetches.is_current(&ticket) {
            if let Ok(mut snapshots) = self.snapshots.lock() {
                snapshots.insert(key, items.clone());
            }
            return Ok(items);
        }

        // Superseded while in flight: answer from the newer snapshot when it
        // has already landed, otherwise fall back to what we fetched.
        tracing::debug!(%token, "catalog fetch superseded");
        let cached = self
            .snapshots
            .lock()
            .ok()
            .and_then(|snapshots| snapshots.get(&key).cloned());
        Ok(cached.unwrap_or(items))
    }

    /// Run `f` against the session's cart, creating it on first touch.
    pub fn with_cart<T>(&self, token: SessionToken, f: impl FnOnce(&mut Cart) -> T) -> T {
        let mut carts = match self.carts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(carts.entry(token).or_default())
    }

    /// Tear down everything keyed by a session that just signed out.
    pub fn end_session(&self, token: SessionToken) {
        if let Ok(mut carts) = self.carts.lock() {
            carts.remove(&token);
        }
        let key = format!("catalog:{token}");
        self.fetches.forget(&key);
        if let Ok(mut snapshots) = self.snapshots.lock() {
            snapshots.remove(&key);
        }
    }
}

/// Production wiring: in-memory document store, HTTP prediction client.
pub fn build_services(prediction_url: String) -> AppServices {
    AppServices::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(HttpPredictionClient::new(prediction_url)),
    )
}
