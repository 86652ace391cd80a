//! Table filters driven by the toolbar selects. `None` means "Semua".

use crate::{LogCategory, LogEntry, PaymentMethod, Payout, PayoutStatus, Transaction, TxStatus};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFilter {
    pub reseller: Option<&'static str>,
    pub status: Option<TxStatus>,
    pub method: Option<PaymentMethod>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.reseller.is_none_or(|r| tx.reseller == Some(r))
            && self.status.is_none_or(|s| tx.status == s)
            && self.method.is_none_or(|m| tx.method == m)
    }

    pub fn apply<'a>(&self, txs: &'a [Transaction]) -> Vec<&'a Transaction> {
        txs.iter().filter(|tx| self.matches(tx)).collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub category: Option<LogCategory>,
    /// Case-insensitive substring over actor, description and reference.
    pub keyword: String,
}

impl LogFilter {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if self.category.is_some_and(|c| entry.category != c) {
            return false;
        }

        let keyword = self.keyword.trim().to_lowercase();
        keyword.is_empty()
            || [entry.actor, entry.description, entry.reference]
                .iter()
                .any(|field| field.to_lowercase().contains(&keyword))
    }

    pub fn apply<'a>(&self, entries: &'a [LogEntry]) -> Vec<&'a LogEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PayoutFilter {
    pub status: Option<PayoutStatus>,
}

impl PayoutFilter {
    pub fn apply<'a>(&self, payouts: &'a [Payout]) -> Vec<&'a Payout> {
        payouts
            .iter()
            .filter(|p| self.status.is_none_or(|s| p.status == s))
            .collect()
    }
}

/// Parse a select value where the empty string means "all".
pub fn parse_choice<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::{LOGS, PAYOUTS, TRANSACTIONS};

    use super::*;

    fn refs(txs: Vec<&Transaction>) -> Vec<&'static str> {
        txs.into_iter().map(|t| t.reference).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(TransactionFilter::default().apply(&TRANSACTIONS).len(), 5);
        assert_eq!(LogFilter::default().apply(&LOGS).len(), 4);
        assert_eq!(PayoutFilter::default().apply(&PAYOUTS).len(), 2);
    }

    #[test]
    fn transactions_by_reseller_and_status() {
        let filter = TransactionFilter {
            reseller: Some("Muhammad Ilham"),
            ..Default::default()
        };
        assert_eq!(refs(filter.apply(&TRANSACTIONS)), ["TRX#A9F32", "TRX#D4Q12"]);

        let filter = TransactionFilter {
            reseller: Some("Muhammad Ilham"),
            status: Some(TxStatus::Paid),
            ..Default::default()
        };
        assert_eq!(refs(filter.apply(&TRANSACTIONS)), ["TRX#A9F32"]);
    }

    #[test]
    fn transactions_by_method() {
        let filter = TransactionFilter {
            method: Some(PaymentMethod::Qris),
            ..Default::default()
        };
        assert_eq!(refs(filter.apply(&TRANSACTIONS)), ["TRX#A9F32", "TRX#E1M03"]);

        let filter = TransactionFilter {
            status: Some(TxStatus::Failed),
            ..Default::default()
        };
        assert!(filter.apply(&TRANSACTIONS).is_empty());
    }

    #[test]
    fn logs_by_category_and_keyword() {
        let filter = LogFilter {
            category: Some(LogCategory::Refund),
            keyword: String::new(),
        };
        assert_eq!(filter.apply(&LOGS).len(), 1);

        let filter = LogFilter {
            category: None,
            keyword: "  trx#a9f32 ".into(),
        };
        assert_eq!(filter.apply(&LOGS).len(), 2);

        let filter = LogFilter {
            category: Some(LogCategory::System),
            keyword: "QRIS".into(),
        };
        assert!(filter.apply(&LOGS).is_empty());
    }

    #[test]
    fn payouts_by_status() {
        let filter = PayoutFilter {
            status: Some(PayoutStatus::Pending),
        };
        let ids: Vec<_> = filter.apply(&PAYOUTS).iter().map(|p| p.id).collect();
        assert_eq!(ids, ["#WD-1024"]);
    }

    #[test]
    fn choices() {
        assert_eq!(parse_choice::<TxStatus>(""), None);
        assert_eq!(parse_choice::<TxStatus>("Paid"), Some(TxStatus::Paid));
        assert_eq!(parse_choice::<TxStatus>("Lost"), None);
    }
}
