use serde::{Deserialize, Serialize};

use canemart_core::DomainError;

/// The three marketplace roles. A session acts in exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Mill,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Mill => "mill",
            Role::Customer => "customer",
        }
    }

    /// Fallback display name when the identity provider supplies none.
    pub fn anonymous_display_name(&self) -> &'static str {
        match self {
            Role::Farmer => "Unknown Farmer",
            Role::Mill => "Unknown Mill",
            Role::Customer => "Customer",
        }
    }
}

impl core::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(Role::Farmer),
            "mill" => Ok(Role::Mill),
            "customer" => Ok(Role::Customer),
            other => Err(DomainError::validation(format!("unknown role: {other:?}"))),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_str() {
        for role in [Role::Farmer, Role::Mill, Role::Customer] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("admin".parse::<Role>().is_err());
    }
}
