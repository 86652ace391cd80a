//! Read-only records shown by the dashboard.

use std::{fmt, str::FromStr};

use jiff::{
    Span,
    civil::{Date, DateTime},
};

use crate::{Error, Result, Rupiah};

/// Implements `label`, `Display`, `FromStr` and `ALL` for a label-carrying enum.
macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| crate::err!(concat!("unknown ", stringify!($name), ": {}"), s))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

labelled_enum!(BillingCycle { Monthly => "bulan", Yearly => "tahun" });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Rupiah,
    pub cycle: BillingCycle,
}

impl Product {
    /// `Rp 120.000/bulan`
    pub fn price_label(&self) -> String {
        format!("{}/{}", self.price, self.cycle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxStatus {
    Paid,
    Pending,
    Refunded,
    Failed,
}

labelled_enum!(TxStatus {
    Paid => "Paid",
    Pending => "Pending",
    Refunded => "Refunded",
    Failed => "Failed",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Qris,
    Va,
    EWallet,
    Cc,
}

labelled_enum!(PaymentMethod {
    Qris => "QRIS",
    Va => "VA",
    EWallet => "e-Wallet",
    Cc => "CC",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub at: DateTime,
    pub product: &'static str,
    /// `None` for direct sales.
    pub reseller: Option<&'static str>,
    pub buyer: &'static str,
    pub price: Rupiah,
    pub discount: Rupiah,
    pub status: TxStatus,
    pub method: PaymentMethod,
    pub reference: &'static str,
}

impl Transaction {
    pub fn reseller_label(&self) -> &'static str {
        self.reseller.unwrap_or("-")
    }

    pub fn discount_label(&self) -> String {
        if self.discount.is_zero() {
            "-".to_string()
        } else {
            self.discount.to_string()
        }
    }

    pub fn when(&self) -> String {
        format_datetime(self.at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoutStatus {
    Pending,
    Scheduled,
    Paid,
}

labelled_enum!(PayoutStatus {
    Pending => "Pending",
    Scheduled => "Scheduled",
    Paid => "Paid",
});

/// How long after submission a payout settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementPolicy {
    /// `T+n`: funds available `n` days after the request.
    Delayed { days: u8 },
    Instant,
}

impl SettlementPolicy {
    pub const T_PLUS_5: SettlementPolicy = SettlementPolicy::Delayed { days: 5 };

    pub fn days(self) -> u8 {
        match self {
            SettlementPolicy::Delayed { days } => days,
            SettlementPolicy::Instant => 0,
        }
    }
}

impl fmt::Display for SettlementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementPolicy::Delayed { days } => write!(f, "T+{days}"),
            SettlementPolicy::Instant => f.write_str("Instant"),
        }
    }
}

impl FromStr for SettlementPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "Instant" {
            return Ok(SettlementPolicy::Instant);
        }
        s.strip_prefix("T+")
            .and_then(|days| days.parse().ok())
            .map(|days| SettlementPolicy::Delayed { days })
            .ok_or_else(|| crate::err!("unknown settlement policy: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub id: &'static str,
    pub reseller: &'static str,
    pub amount: Rupiah,
    pub submitted: Date,
    pub policy: SettlementPolicy,
    pub status: PayoutStatus,
    pub proof: Option<&'static str>,
}

impl Payout {
    /// Submission date plus the policy's settlement delay.
    pub fn eta(&self) -> Date {
        self.submitted
            .saturating_add(Span::new().days(i64::from(self.policy.days())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Sale,
    Payment,
    Refund,
    System,
}

labelled_enum!(LogCategory {
    Sale => "Sale",
    Payment => "Payment",
    Refund => "Refund",
    System => "System",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime,
    pub category: LogCategory,
    pub actor: &'static str,
    pub description: &'static str,
    pub reference: &'static str,
}

impl LogEntry {
    pub fn when(&self) -> String {
        format_datetime(self.at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gateway {
    pub method: PaymentMethod,
    pub uptime_pct: f64,
    pub p95_secs: f64,
}

impl Gateway {
    /// `Uptime 99.98% • p95 2.1s`
    pub fn summary(&self) -> String {
        format!("Uptime {:.2}% • p95 {:.1}s", self.uptime_pct, self.p95_secs)
    }
}

/// `16 Nov 2025`
pub fn format_date(date: Date) -> String {
    date.strftime("%d %b %Y").to_string()
}

/// `16 Nov 2025 14:03`
pub fn format_datetime(at: DateTime) -> String {
    at.strftime("%d %b %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, datetime};

    use super::*;

    #[test]
    fn eta_adds_policy_days() {
        let payout = Payout {
            id: "#WD-1",
            reseller: "Siti A",
            amount: Rupiah(300_000),
            submitted: date(2025, 11, 28),
            policy: SettlementPolicy::T_PLUS_5,
            status: PayoutStatus::Pending,
            proof: None,
        };
        assert_eq!(payout.eta(), date(2025, 12, 3));

        let instant = Payout {
            policy: SettlementPolicy::Instant,
            ..payout
        };
        assert_eq!(instant.eta(), payout.submitted);
    }

    #[test]
    fn policy_labels() {
        assert_eq!(SettlementPolicy::T_PLUS_5.to_string(), "T+5");
        assert_eq!(
            "T+2".parse::<SettlementPolicy>().unwrap(),
            SettlementPolicy::Delayed { days: 2 }
        );
        assert_eq!(
            "Instant".parse::<SettlementPolicy>().unwrap(),
            SettlementPolicy::Instant
        );
        assert!("T+".parse::<SettlementPolicy>().is_err());
        assert!("soon".parse::<SettlementPolicy>().is_err());
    }

    #[test]
    fn enum_labels_parse() {
        assert_eq!("e-Wallet".parse::<PaymentMethod>().unwrap(), PaymentMethod::EWallet);
        assert_eq!("Refunded".parse::<TxStatus>().unwrap(), TxStatus::Refunded);
        assert_eq!("tahun".parse::<BillingCycle>().unwrap(), BillingCycle::Yearly);
        let e = "Bitcoin".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(e.message, "unknown PaymentMethod: Bitcoin");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date(date(2025, 11, 11)), "11 Nov 2025");
        assert_eq!(
            format_datetime(datetime(2025, 11, 14, 9, 17, 0, 0)),
            "14 Nov 2025 09:17"
        );
    }

    #[test]
    fn gateway_summary() {
        let g = Gateway {
            method: PaymentMethod::Va,
            uptime_pct: 99.9,
            p95_secs: 2.9,
        };
        assert_eq!(g.summary(), "Uptime 99.90% • p95 2.9s");
    }

    #[test]
    fn product_price_label() {
        let p = Product {
            id: "prd-3",
            name: "Domain .com",
            price: Rupiah(150_000),
            cycle: BillingCycle::Yearly,
        };
        assert_eq!(p.price_label(), "Rp\u{a0}150.000/tahun");
    }
}
