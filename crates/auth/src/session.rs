//! Explicitly scoped sessions.
//!
//! A session is created when the external identity provider asserts a
//! signed-in user, and destroyed at sign-out. Per-session state elsewhere
//! (the cart) is keyed by the session token and cleared alongside it, so no
//! module-level mutable state outlives a session.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use canemart_core::{SessionToken, UserId};

use crate::role::Role;

/// What the external identity provider vouches for at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentity {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub role: Role,
}

/// A live signed-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: SessionToken,
    user_id: UserId,
    display_name: Option<String>,
    role: Role,
}

impl Session {
    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Owner name stamped on created records; falls back to a role-specific
    /// placeholder when the provider supplied no display name.
    pub fn owner_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.role.anonymous_display_name())
    }
}

/// In-memory registry of live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: RwLock<HashMap<SessionToken, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for a verified identity and return its token.
    pub fn sign_in(&self, identity: ExternalIdentity) -> SessionToken {
        let token = SessionToken::new();
        let session = Session {
            token,
            user_id: identity.user_id,
            display_name: identity.display_name,
            role: identity.role,
        };
        if let Ok(mut map) = self.inner.write() {
            map.insert(token, session);
        }
        tracing::info!(%token, "session created");
        token
    }

    /// Resolve a presented token to its session, if still signed in.
    pub fn resolve(&self, token: SessionToken) -> Option<Session> {
        let map = self.inner.read().ok()?;
        map.get(&token).cloned()
    }

    /// Sign out: drop the session. Returns the removed session so callers can
    /// clear state keyed by it (cart, pending fetches).
    pub fn sign_out(&self, token: SessionToken) -> Option<Session> {
        let removed = self.inner.write().ok()?.remove(&token);
        if removed.is_some() {
            tracing::info!(%token, "session cleared");
        }
        removed
    }
}
