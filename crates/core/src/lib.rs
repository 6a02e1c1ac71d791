//! `canemart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error model, and strict coercion of the
//! unit-suffixed strings that upstream records carry for quantities, prices,
//! and percentages.

pub mod coerce;
pub mod error;
pub mod grade;
pub mod id;

pub use coerce::{Money, Percentage, Quantity};
pub use error::{DomainError, DomainResult};
pub use grade::QualityGrade;
pub use id::{RecordId, SessionToken, UserId};
