//! Overview cards and the figures behind them.

use crate::{
    BillingCycle, Feature, Product, Role, Rupiah, Transaction, TxStatus, can, config::PayoutConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Paid sales.
    pub today: Rupiah,
    /// All sales regardless of status.
    pub month: Rupiah,
    /// Monthly recurring revenue from monthly-billed products.
    pub mrr: Rupiah,
}

impl Metrics {
    pub fn compute(transactions: &[Transaction], products: &[Product]) -> Self {
        Self {
            today: transactions
                .iter()
                .filter(|t| t.status == TxStatus::Paid)
                .map(|t| t.price)
                .sum(),
            month: transactions.iter().map(|t| t.price).sum(),
            mrr: products
                .iter()
                .filter(|p| p.cycle == BillingCycle::Monthly)
                .map(|p| p.price)
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewCard {
    TodaySales,
    Mrr,
    Balance,
    Incidents,
    AutoPayment,
    Funnel,
}

impl OverviewCard {
    const ORDER: [OverviewCard; 6] = [
        OverviewCard::TodaySales,
        OverviewCard::Mrr,
        OverviewCard::Balance,
        OverviewCard::Incidents,
        OverviewCard::AutoPayment,
        OverviewCard::Funnel,
    ];

    pub fn is_visible(self, role: Role) -> bool {
        match self {
            OverviewCard::Mrr => can(role, Feature::FinanceMetrics),
            OverviewCard::Incidents => can(role, Feature::SystemView),
            _ => true,
        }
    }
}

/// Cards shown on the overview grid for `role`, in layout order.
pub fn overview_cards(role: Role) -> Vec<OverviewCard> {
    OverviewCard::ORDER
        .into_iter()
        .filter(|card| card.is_visible(role))
        .collect()
}

/// The call to action under the balance card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    /// "Ajukan Pencairan" – opens the payout request modal.
    RequestPayout,
    /// "Kelola Pencairan"
    ManagePayouts,
}

pub fn balance_action(role: Role) -> Option<BalanceAction> {
    if role.is_reseller() {
        Some(BalanceAction::RequestPayout)
    } else if can(role, Feature::InstantPayout) {
        Some(BalanceAction::ManagePayouts)
    } else {
        None
    }
}

/// Balance shown on the card: the reseller's own or the platform's.
pub fn available_balance(role: Role, payout: &PayoutConfig) -> Rupiah {
    if role.is_reseller() {
        payout.reseller_balance
    } else {
        payout.platform_balance
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::CONFIG,
        mock::{PRODUCTS, TRANSACTIONS},
    };

    use super::*;

    #[test]
    fn metrics_from_mock_data() {
        let m = Metrics::compute(&TRANSACTIONS, &PRODUCTS);
        assert_eq!(m.today, Rupiah(120_000 + 230_000 + 20_000));
        assert_eq!(m.month, Rupiah(640_000));
        assert_eq!(m.mrr, Rupiah(370_000));
    }

    #[test]
    fn metrics_of_nothing() {
        let m = Metrics::compute(&[], &[]);
        assert_eq!(m.today, Rupiah::ZERO);
        assert_eq!(m.month, Rupiah::ZERO);
        assert_eq!(m.mrr, Rupiah::ZERO);
    }

    #[test]
    fn switching_reseller_to_owner() {
        let reseller = overview_cards(Role::Reseller);
        assert!(!reseller.contains(&OverviewCard::Mrr));
        assert_eq!(balance_action(Role::Reseller), Some(BalanceAction::RequestPayout));

        let owner = overview_cards(Role::Owner);
        assert!(owner.contains(&OverviewCard::Mrr));
        assert_ne!(balance_action(Role::Owner), Some(BalanceAction::RequestPayout));
        assert_eq!(balance_action(Role::Owner), Some(BalanceAction::ManagePayouts));
    }

    #[test]
    fn cards_per_role() {
        use OverviewCard::*;

        assert_eq!(
            overview_cards(Role::Reseller),
            [TodaySales, Balance, AutoPayment, Funnel]
        );
        assert_eq!(
            overview_cards(Role::Investor),
            [TodaySales, Mrr, Balance, AutoPayment, Funnel]
        );
        assert_eq!(
            overview_cards(Role::Engineer),
            [TodaySales, Balance, Incidents, AutoPayment, Funnel]
        );
        assert_eq!(overview_cards(Role::HighAdmin).len(), 6);
    }

    #[test]
    fn balance_action_for_plain_roles() {
        assert_eq!(balance_action(Role::Admin), None);
        assert_eq!(balance_action(Role::Investor), None);
        assert_eq!(balance_action(Role::Engineer), None);
        assert_eq!(balance_action(Role::HighAdmin), Some(BalanceAction::ManagePayouts));
    }

    #[test]
    fn balances_come_from_config() {
        assert_eq!(
            available_balance(Role::Reseller, &CONFIG.payout),
            Rupiah(1_250_000)
        );
        assert_eq!(
            available_balance(Role::Owner, &CONFIG.payout),
            Rupiah(42_800_000)
        );
    }
}
