//! `canemart-listings` — farmer-submitted sugarcane listings.
//!
//! **Responsibility:** the CaneListing entity: validated creation, the
//! monotonic status lifecycle, and buyer/revenue capture on sale.

pub mod listing;

pub use listing::{BuyerInfo, CaneListing, ListingStatus, NewCaneListing};
