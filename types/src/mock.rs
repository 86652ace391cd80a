//! Hardcoded prototype data.

use jiff::civil::{date, datetime};

use crate::{
    BillingCycle::*, Gateway, LogCategory, LogEntry, PaymentMethod::*, Payout, PayoutStatus,
    Product, Rupiah, SettlementPolicy, Transaction, TxStatus,
};

pub static PRODUCTS: [Product; 4] = [
    Product {
        id: "prd-1",
        name: "VPS 2vCPU/4GB/40GB SSD",
        price: Rupiah(120_000),
        cycle: Monthly,
    },
    Product {
        id: "prd-2",
        name: "VPS 4vCPU/8GB/80GB SSD",
        price: Rupiah(230_000),
        cycle: Monthly,
    },
    Product {
        id: "prd-3",
        name: "Domain .com",
        price: Rupiah(150_000),
        cycle: Yearly,
    },
    Product {
        id: "prd-4",
        name: "Add-on IP",
        price: Rupiah(20_000),
        cycle: Monthly,
    },
];

pub static TRANSACTIONS: [Transaction; 5] = [
    Transaction {
        at: datetime(2025, 11, 16, 14, 3, 0, 0),
        product: "VPS 2/4/40",
        reseller: Some("Muhammad Ilham"),
        buyer: "user****91",
        price: Rupiah(120_000),
        discount: Rupiah::ZERO,
        status: TxStatus::Paid,
        method: Qris,
        reference: "TRX#A9F32",
    },
    Transaction {
        at: datetime(2025, 11, 16, 12, 41, 0, 0),
        product: "Domain .com",
        reseller: None,
        buyer: "user****77",
        price: Rupiah(150_000),
        discount: Rupiah::ZERO,
        status: TxStatus::Pending,
        method: Va,
        reference: "TRX#B2K10",
    },
    Transaction {
        at: datetime(2025, 11, 15, 20, 9, 0, 0),
        product: "VPS 4/8/80",
        reseller: Some("Siti A"),
        buyer: "user****55",
        price: Rupiah(230_000),
        discount: Rupiah::ZERO,
        status: TxStatus::Paid,
        method: EWallet,
        reference: "TRX#C7P88",
    },
    Transaction {
        at: datetime(2025, 11, 14, 9, 17, 0, 0),
        product: "VPS 2/4/40",
        reseller: Some("Muhammad Ilham"),
        buyer: "user****12",
        price: Rupiah(120_000),
        discount: Rupiah::ZERO,
        status: TxStatus::Refunded,
        method: Cc,
        reference: "TRX#D4Q12",
    },
    Transaction {
        at: datetime(2025, 11, 13, 18, 22, 0, 0),
        product: "Add-on IP",
        reseller: None,
        buyer: "user****33",
        price: Rupiah(20_000),
        discount: Rupiah::ZERO,
        status: TxStatus::Paid,
        method: Qris,
        reference: "TRX#E1M03",
    },
];

pub static LOGS: [LogEntry; 4] = [
    LogEntry {
        at: datetime(2025, 11, 16, 14, 3, 0, 0),
        category: LogCategory::Sale,
        actor: "Muhammad Ilham",
        description: "menjual VPS (2 vCPU, 4GB RAM, 40GB SSD) seharga Rp120.000.",
        reference: "TRX#A9F32",
    },
    LogEntry {
        at: datetime(2025, 11, 16, 14, 3, 0, 0),
        category: LogCategory::Payment,
        actor: "System",
        description: "Auto payment berhasil (QRIS), captured 2.1s.",
        reference: "TRX#A9F32",
    },
    LogEntry {
        at: datetime(2025, 11, 15, 20, 11, 0, 0),
        category: LogCategory::System,
        actor: "Engineer",
        description: "Provisioning sukses untuk TRX#C7P88 (server-01).",
        reference: "TRX#C7P88",
    },
    LogEntry {
        at: datetime(2025, 11, 14, 9, 25, 0, 0),
        category: LogCategory::Refund,
        actor: "High Admin",
        description: "Refund untuk TRX#D4Q12, alasan: double charge.",
        reference: "TRX#D4Q12",
    },
];

pub static PAYOUTS: [Payout; 2] = [
    Payout {
        id: "#WD-1023",
        reseller: "Muhammad Ilham",
        amount: Rupiah(500_000),
        submitted: date(2025, 11, 11),
        policy: SettlementPolicy::T_PLUS_5,
        status: PayoutStatus::Scheduled,
        proof: None,
    },
    Payout {
        id: "#WD-1024",
        reseller: "Siti A",
        amount: Rupiah(300_000),
        submitted: date(2025, 11, 13),
        policy: SettlementPolicy::T_PLUS_5,
        status: PayoutStatus::Pending,
        proof: None,
    },
];

pub static GATEWAYS: [Gateway; 4] = [
    Gateway {
        method: Qris,
        uptime_pct: 99.98,
        p95_secs: 2.1,
    },
    Gateway {
        method: Va,
        uptime_pct: 99.90,
        p95_secs: 2.9,
    },
    Gateway {
        method: EWallet,
        uptime_pct: 99.95,
        p95_secs: 2.4,
    },
    Gateway {
        method: Cc,
        uptime_pct: 99.87,
        p95_secs: 3.1,
    },
];

/// Distinct resellers appearing in the sales table, in first-seen order.
pub fn resellers() -> Vec<&'static str> {
    let mut names = Vec::new();
    for name in TRANSACTIONS.iter().filter_map(|t| t.reseller) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// The payout queue settled under `policy`, normally the configured one.
pub fn payouts(policy: SettlementPolicy) -> Vec<Payout> {
    PAYOUTS.iter().map(|p| Payout { policy, ..*p }).collect()
}

pub fn find_transaction(reference: &str) -> Option<&'static Transaction> {
    TRANSACTIONS.iter().find(|t| t.reference == reference)
}

#[cfg(test)]
mod tests {
    use crate::format_date;

    use super::*;

    #[test]
    fn payout_etas_follow_t_plus_5() {
        let etas: Vec<_> = PAYOUTS.iter().map(|p| format_date(p.eta())).collect();
        assert_eq!(etas, ["16 Nov 2025", "18 Nov 2025"]);
    }

    #[test]
    fn payout_etas_follow_the_given_policy() {
        let etas: Vec<_> = payouts(SettlementPolicy::Delayed { days: 2 })
            .iter()
            .map(|p| format_date(p.eta()))
            .collect();
        assert_eq!(etas, ["13 Nov 2025", "15 Nov 2025"]);

        let instant = payouts(SettlementPolicy::Instant);
        assert!(instant.iter().all(|p| p.eta() == p.submitted));
    }

    #[test]
    fn configured_policy_matches_the_fixtures() {
        assert_eq!(payouts(crate::config::CONFIG.payout.policy()), PAYOUTS);
    }

    #[test]
    fn resellers_are_distinct() {
        assert_eq!(resellers(), ["Muhammad Ilham", "Siti A"]);
    }

    #[test]
    fn lookup_by_reference() {
        assert_eq!(find_transaction("TRX#C7P88").unwrap().buyer, "user****55");
        assert!(find_transaction("TRX#NOPE").is_none());
    }

    #[test]
    fn references_are_unique() {
        for (i, a) in TRANSACTIONS.iter().enumerate() {
            for b in &TRANSACTIONS[i + 1..] {
                assert_ne!(a.reference, b.reference);
            }
        }
    }
}
