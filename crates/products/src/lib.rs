//! `canemart-products` — mill-submitted finished sugar products.
//!
//! **Responsibility:** the MillProductRecord entity: the seven sugar forms,
//! validated creation, and the stock status lifecycle.

pub mod product;

pub use product::{MillProduct, NewMillProduct, ProductStatus, ProductType};
