//! `canemart-catalog` — the customer-facing catalog.
//!
//! Two record kinds (cane listings, mill products) are normalized into one
//! display-oriented shape by the adapter, then queried through the
//! filter/sort/paginate pipeline. Nothing here persists; catalog items are
//! recomputed from source records on every fetch.

pub mod adapter;
pub mod pipeline;

pub use adapter::{normalize, normalize_one, CatalogItem, ItemDetails, RawRecord};
pub use pipeline::{run, CatalogPage, CatalogQuery, Category, SortOrder, TypeFilter, DEFAULT_PAGE_SIZE};
