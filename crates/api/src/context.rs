use canemart_auth::{Role, Session};
use canemart_core::{SessionToken, UserId};

/// Per-request session context, inserted by the auth middleware.
///
/// Immutable; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn token(&self) -> SessionToken {
        self.session.token()
    }

    pub fn user_id(&self) -> UserId {
        self.session.user_id()
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn owner_name(&self) -> &str {
        self.session.owner_name()
    }
}
