//! Sidebar navigation and section gating.

use std::{fmt, str::FromStr};

use crate::{Error, Feature, Result, Role, can};

use Role::*;

/// One main-content section of the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    #[default]
    Overview,
    Sales,
    Payments,
    Payouts,
    Products,
    System,
    Users,
    Logs,
    Settings,
}

impl SectionKey {
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Overview,
        SectionKey::Sales,
        SectionKey::Payments,
        SectionKey::Payouts,
        SectionKey::Products,
        SectionKey::System,
        SectionKey::Users,
        SectionKey::Logs,
        SectionKey::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SectionKey::Overview => "overview",
            SectionKey::Sales => "sales",
            SectionKey::Payments => "payments",
            SectionKey::Payouts => "payouts",
            SectionKey::Products => "products",
            SectionKey::System => "system",
            SectionKey::Users => "users",
            SectionKey::Logs => "logs",
            SectionKey::Settings => "settings",
        }
    }

    /// Whether the section's content may render for `role`, ignoring which
    /// section is selected.
    pub fn gate(self, role: Role) -> bool {
        match self {
            SectionKey::Overview
            | SectionKey::Sales
            | SectionKey::Payments
            | SectionKey::Payouts => true,
            SectionKey::Products => can(role, Feature::ManageProducts),
            SectionKey::System => can(role, Feature::SystemView),
            SectionKey::Users => can(role, Feature::ManageUsers),
            SectionKey::Logs => can(role, Feature::ViewLogs),
            SectionKey::Settings => can(role, Feature::Settings) || role.is_reseller(),
        }
    }

    /// Whether this section renders when `current` is selected.
    pub fn is_visible(self, role: Role, current: SectionKey) -> bool {
        self == current && self.gate(role)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SectionKey::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| crate::err!("unknown section: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: SectionKey,
    pub label: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

pub static NAV_ITEMS: [NavItem; 9] = [
    NavItem { key: SectionKey::Overview, label: "Overview", roles: &Role::ALL },
    NavItem { key: SectionKey::Sales, label: "Penjualan", roles: &Role::ALL },
    NavItem { key: SectionKey::Payments, label: "Pembayaran", roles: &Role::ALL },
    NavItem { key: SectionKey::Payouts, label: "Pencairan", roles: &Role::ALL },
    NavItem { key: SectionKey::Products, label: "Produk", roles: &[Admin, HighAdmin, Owner] },
    NavItem { key: SectionKey::System, label: "Sistem", roles: &[Engineer, HighAdmin, Owner] },
    NavItem { key: SectionKey::Users, label: "Pengguna/Roles", roles: &[HighAdmin, Owner] },
    NavItem {
        key: SectionKey::Logs,
        label: "Logs",
        roles: &[Admin, Investor, Engineer, HighAdmin, Owner],
    },
    NavItem { key: SectionKey::Settings, label: "Settings", roles: &[HighAdmin, Owner, Reseller] },
];

/// Sidebar entries for `role`, in declaration order.
pub fn nav_for(role: Role) -> impl Iterator<Item = &'static NavItem> {
    NAV_ITEMS.iter().filter(move |item| item.allows(role))
}

/// The single section that renders, if any.
pub fn visible_section(role: Role, current: SectionKey) -> Option<SectionKey> {
    SectionKey::ALL
        .into_iter()
        .find(|section| section.is_visible(role, current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Role) -> Vec<&'static str> {
        nav_for(role).map(|item| item.key.key()).collect()
    }

    #[test]
    fn nav_is_filtered_by_allowed_roles() {
        for role in Role::ALL {
            let expected: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|item| item.roles.contains(&role))
                .map(|item| item.key.key())
                .collect();
            assert_eq!(keys(role), expected, "{role}");
        }
    }

    #[test]
    fn nav_per_role() {
        assert_eq!(
            keys(Reseller),
            ["overview", "sales", "payments", "payouts", "settings"]
        );
        assert_eq!(
            keys(Admin),
            ["overview", "sales", "payments", "payouts", "products", "logs"]
        );
        assert_eq!(
            keys(Investor),
            ["overview", "sales", "payments", "payouts", "logs"]
        );
        assert_eq!(
            keys(Engineer),
            ["overview", "sales", "payments", "payouts", "system", "logs"]
        );
        assert_eq!(keys(HighAdmin).len(), 9);
        assert_eq!(keys(Owner).len(), 9);
    }

    #[test]
    fn exactly_one_section_renders_when_gated_open() {
        for role in Role::ALL {
            for current in nav_for(role).map(|item| item.key) {
                let rendered: Vec<_> = SectionKey::ALL
                    .into_iter()
                    .filter(|s| s.is_visible(role, current))
                    .collect();
                assert_eq!(rendered, [current], "{role} on {current}");
            }
        }
    }

    #[test]
    fn gated_section_renders_nothing_for_wrong_role() {
        assert_eq!(visible_section(Reseller, SectionKey::Products), None);
        assert_eq!(visible_section(Investor, SectionKey::System), None);
        assert_eq!(visible_section(Admin, SectionKey::Users), None);
        assert_eq!(visible_section(Reseller, SectionKey::Logs), None);
        assert_eq!(visible_section(Engineer, SectionKey::Settings), None);
    }

    #[test]
    fn settings_open_to_reseller() {
        assert_eq!(
            visible_section(Reseller, SectionKey::Settings),
            Some(SectionKey::Settings)
        );
        assert_eq!(
            visible_section(Owner, SectionKey::Settings),
            Some(SectionKey::Settings)
        );
    }

    #[test]
    fn nav_and_gate_agree() {
        // A listed nav item always leads to a section that renders.
        for role in Role::ALL {
            for item in nav_for(role) {
                assert!(item.key.gate(role), "{role} sees {} but cannot open it", item.label);
            }
        }
    }

    #[test]
    fn section_keys_parse() {
        assert_eq!("logs".parse::<SectionKey>().unwrap(), SectionKey::Logs);
        assert!("billing".parse::<SectionKey>().is_err());
    }
}
