//! `canemart-infra` — infrastructure adapters.
//!
//! The document database and the prediction model are hosted services; this
//! crate holds our side of each seam: the [`store::DocumentStore`] trait with
//! an in-memory implementation for dev/tests, the HTTP prediction client,
//! and the fetch sequencer that keeps stale list responses from overwriting
//! newer ones.

pub mod fetch;
pub mod prediction;
pub mod store;

pub use fetch::{FetchSequencer, FetchTicket};
pub use prediction::{HttpPredictionClient, PredictionClient, PredictionError};
pub use store::{DocumentStore, InMemoryDocumentStore, StoreError};
