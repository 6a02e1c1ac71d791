//! `canemart-cart` — the session shopping cart.
//!
//! An ordered list of quantity-keyed line items living only in session
//! memory. Not persisted; dropped when its session signs out.

pub mod cart;

pub use cart::{Cart, CartLine};
