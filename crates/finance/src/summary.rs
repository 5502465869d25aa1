use serde::{Deserialize, Serialize};

use tradebook_records::{Category, Transaction, TransactionKind};

/// Account name whose income counts towards the cash balance.
pub const CASH_ACCOUNT: &str = "cash";

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_sales: f64,
    pub total_purchases: f64,
    pub income_total: f64,
    pub expense_total: f64,
    /// Income booked to the `cash` account.
    pub cash_balance: f64,
    /// Outstanding dues on sale transactions.
    pub receivables: f64,
    /// `income_total - expense_total`.
    pub net_balance: f64,
    pub sales_count: usize,
    pub purchase_count: usize,
    pub transaction_count: usize,
}

/// Single pass over the ledger.
pub fn financial_summary<'a, I>(transactions: I) -> FinancialSummary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut s = FinancialSummary::default();

    for tx in transactions {
        s.transaction_count += 1;

        match tx.kind {
            TransactionKind::Sale => {
                s.total_sales += tx.amount;
                s.sales_count += 1;
                if tx.due > 0.0 {
                    s.receivables += tx.due;
                }
            }
            TransactionKind::Purchase => {
                s.total_purchases += tx.amount;
                s.purchase_count += 1;
            }
            _ => {}
        }

        match tx.category {
            Category::Income => {
                s.income_total += tx.amount;
                if tx.account.as_deref() == Some(CASH_ACCOUNT) {
                    s.cash_balance += tx.amount;
                }
            }
            Category::Expense => s.expense_total += tx.amount,
            Category::Other(_) => {}
        }
    }

    s.net_balance = s.income_total - s.expense_total;
    s
}
