//! Reporting periods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradebook_core::{DomainError, DomainResult};
use tradebook_records::Transaction;

use crate::summary::{FinancialSummary, financial_summary};

/// Inclusive date range. An open bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl DateWindow {
    /// Window covering everything, including undated transactions.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> DomainResult<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(DomainError::validation(format!(
                    "window start {f} is after window end {t}"
                )));
            }
        }
        Ok(Self { from, to })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Undated transactions fall outside any bounded window.
    pub fn contains(&self, tx: &Transaction) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = tx.date else {
            return false;
        };
        self.from.is_none_or(|f| date >= f) && self.to.is_none_or(|t| date <= t)
    }

    pub fn within<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.contains(tx)).collect()
    }
}

/// [`financial_summary`] over the transactions inside `window`.
pub fn financial_summary_in(transactions: &[Transaction], window: &DateWindow) -> FinancialSummary {
    financial_summary(transactions.iter().filter(|tx| window.contains(tx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::TimeZone;
    use serde_json::json;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        fixtures::transactions(json!([
            {"type": "sale", "category": "income", "amount": 10, "date": "2024-03-01"},
            {"type": "sale", "category": "income", "amount": 20, "date": "2024-03-15T12:00:00Z"},
            {"type": "purchase", "category": "expense", "amount": 5, "date": "2024-03-31"},
            {"type": "sale", "category": "income", "amount": 100}
        ]))
    }

    #[test]
    fn unbounded_window_keeps_everything() {
        let txs = ledger();
        assert_eq!(DateWindow::all().within(&txs).len(), 4);
        assert_eq!(financial_summary_in(&txs, &DateWindow::all()), financial_summary(&txs));
    }

    #[test]
    fn bounds_are_inclusive_and_undated_rows_drop_out() {
        let txs = ledger();
        let window = DateWindow::new(Some(day(1)), Some(day(15))).unwrap();
        let s = financial_summary_in(&txs, &window);
        assert_eq!(s.total_sales, 10.0);
        assert_eq!(s.transaction_count, 1);

        let window = DateWindow::new(Some(day(2)), None).unwrap();
        let s = financial_summary_in(&txs, &window);
        assert_eq!((s.total_sales, s.total_purchases), (20.0, 5.0));
    }

    #[test]
    fn built_transactions_are_windowed_by_date() {
        use tradebook_records::{Category, TransactionKind};

        let txs = vec![
            Transaction::new(TransactionKind::Sale, Category::Income, 12.5).with_date(day(5)),
            Transaction::new(TransactionKind::Sale, Category::Income, 7.25).with_date(day(20)),
            Transaction::new(TransactionKind::Sale, Category::Income, 1.0),
        ];

        let window = DateWindow::new(Some(day(5)), Some(day(5))).unwrap();
        let kept = window.within(&txs);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].amount, 12.5);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = DateWindow::new(Some(day(10)), Some(day(1))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
