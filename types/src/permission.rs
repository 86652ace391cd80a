//! The static role-to-feature table.
//!
//! Nothing here is enforced anywhere; it only decides what the dashboard
//! shows for the currently selected role.

use std::str::FromStr;

use crate::{Error, Result, Role};

use Role::*;

/// A gated dashboard capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ViewLogs,
    ManageProducts,
    SystemView,
    InstantPayout,
    ManageUsers,
    Settings,
    FinanceMetrics,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::ViewLogs,
        Feature::ManageProducts,
        Feature::SystemView,
        Feature::InstantPayout,
        Feature::ManageUsers,
        Feature::Settings,
        Feature::FinanceMetrics,
    ];

    /// The roles allowed to use this feature.
    pub fn roles(self) -> &'static [Role] {
        match self {
            Feature::ViewLogs => &[Admin, Investor, Engineer, HighAdmin, Owner],
            Feature::ManageProducts => &[Admin, HighAdmin, Owner],
            Feature::SystemView => &[Engineer, HighAdmin, Owner],
            Feature::InstantPayout => &[HighAdmin, Owner],
            Feature::ManageUsers => &[HighAdmin, Owner],
            Feature::Settings => &[HighAdmin, Owner],
            Feature::FinanceMetrics => &[Investor, HighAdmin, Owner],
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Feature::ViewLogs => "viewLogs",
            Feature::ManageProducts => "manageProducts",
            Feature::SystemView => "systemView",
            Feature::InstantPayout => "instantPayout",
            Feature::ManageUsers => "manageUsers",
            Feature::Settings => "settings",
            Feature::FinanceMetrics => "financeMetrics",
        }
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.key() == s)
            .ok_or_else(|| crate::err!("unknown feature: {s}"))
    }
}

/// Whether `role` may use `feature`.
pub fn can(role: Role, feature: Feature) -> bool {
    feature.roles().contains(&role)
}

/// String-keyed variant of [`can`]. Unknown keys are never permitted.
pub fn can_key(role: Role, key: &str) -> bool {
    key.parse().is_ok_and(|feature| can(role, feature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_matches_role_lists() {
        for feature in Feature::ALL {
            for role in Role::ALL {
                assert_eq!(
                    can(role, feature),
                    feature.roles().contains(&role),
                    "{role} / {}",
                    feature.key()
                );
            }
        }
    }

    #[test]
    fn reseller_has_no_features() {
        assert!(Feature::ALL.iter().all(|&f| !can(Reseller, f)));
    }

    #[test]
    fn owner_and_high_admin_have_everything() {
        for feature in Feature::ALL {
            assert!(can(Owner, feature));
            assert!(can(HighAdmin, feature));
        }
    }

    #[test]
    fn spot_checks() {
        assert!(can(Investor, Feature::FinanceMetrics));
        assert!(!can(Admin, Feature::FinanceMetrics));
        assert!(can(Engineer, Feature::SystemView));
        assert!(!can(Engineer, Feature::ManageProducts));
        assert!(can(Admin, Feature::ViewLogs));
    }

    #[test]
    fn string_keys() {
        assert!(can_key(Owner, "instantPayout"));
        assert!(!can_key(Admin, "instantPayout"));
        assert!(!can_key(Owner, "launchRockets"));
        assert!(!can_key(Owner, ""));
    }

    #[test]
    fn keys_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.key().parse::<Feature>().unwrap(), feature);
        }
    }
}
