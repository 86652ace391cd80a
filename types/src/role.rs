use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A named user category. Purely a local UI toggle, not an identity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Reseller,
    Admin,
    Investor,
    Engineer,
    #[serde(rename = "High Admin")]
    HighAdmin,
    Owner,
}

impl Role {
    /// Every role, in switcher order.
    pub const ALL: [Role; 6] = [
        Role::Reseller,
        Role::Admin,
        Role::Investor,
        Role::Engineer,
        Role::HighAdmin,
        Role::Owner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Reseller => "Reseller",
            Role::Admin => "Admin",
            Role::Investor => "Investor",
            Role::Engineer => "Engineer",
            Role::HighAdmin => "High Admin",
            Role::Owner => "Owner",
        }
    }

    pub fn is_reseller(self) -> bool {
        self == Role::Reseller
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| crate::err!("unknown role: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for role in Role::ALL {
            assert_eq!(role.label().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        let e = "Janitor".parse::<Role>().unwrap_err();
        assert_eq!(e.message, "unknown role: Janitor");
    }

    #[test]
    fn default_is_reseller() {
        assert_eq!(Role::default(), Role::Reseller);
    }

    #[test]
    fn high_admin_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&Role::HighAdmin).unwrap(),
            "\"High Admin\""
        );
    }
}
