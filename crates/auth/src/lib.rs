//! `canemart-auth` — session boundary (identity is delegated upstream).
//!
//! Authentication itself lives in an external identity provider; this crate
//! only models what arrives at our boundary: a verified identity, the role it
//! acts in, and the session that scopes per-user state between sign-in and
//! sign-out. Decoupled from HTTP and storage.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::{ExternalIdentity, Session, SessionRegistry};
