//! `canemart-grading`
//!
//! **Responsibility:** turn an opaque prediction payload into a quality grade
//! and a suggested price.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on listings/products entities.
//! - It must not mutate domain state.
//! - It emits an assessment the form layer may apply, nothing more.
//!
//! The remote call itself lives in `canemart-infra`; this crate is pure and
//! deterministic apart from the caller-supplied jitter RNG.

pub mod heuristic;
pub mod report;

pub use heuristic::{assess, base_price, GradeAssessment, JITTER_RANGE};
pub use report::{GradingError, PredictionReport};
