use serde::Serialize;

use tradebook_finance::{
    AccountBalance, DateWindow, FinancialSummary, PartyBalance, PartySide, PaymentStatus,
    account_balances, financial_summary, low_stock_products, party_balances, payment_status,
};
use tradebook_records::Invoice;

use crate::snapshot::Snapshot;

/// Invoice counts per settlement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub fully_paid: usize,
    pub partially_paid: usize,
    pub unpaid: usize,
}

impl StatusCounts {
    pub fn tally(invoices: &[Invoice]) -> Self {
        let mut counts = Self::default();
        for inv in invoices {
            match payment_status(inv) {
                PaymentStatus::FullyPaid => counts.fully_paid += 1,
                PaymentStatus::PartiallyPaid => counts.partially_paid += 1,
                PaymentStatus::Unpaid => counts.unpaid += 1,
            }
        }
        counts
    }
}

/// Everything the dashboard page renders.
///
/// The window narrows the ledger figures (`summary`, `accounts`); invoice and
/// stock figures always describe the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub window: DateWindow,
    pub summary: FinancialSummary,
    pub accounts: Vec<AccountBalance>,
    pub low_stock_count: usize,
    pub low_stock_products: Vec<String>,
    pub customers: Vec<PartyBalance>,
    pub suppliers: Vec<PartyBalance>,
    pub total_customer_dues: f64,
    pub total_supplier_payables: f64,
    pub sales_invoice_status: StatusCounts,
    pub purchase_invoice_status: StatusCounts,
}

impl Dashboard {
    pub fn compute(snapshot: &Snapshot, window: &DateWindow) -> Self {
        let ledger = window.within(&snapshot.transactions);

        let low_stock: Vec<String> = low_stock_products(&snapshot.products)
            .into_iter()
            .map(|p| p.name.clone())
            .collect();

        let customers = party_balances(&snapshot.sales_invoices, PartySide::Customer);
        let suppliers = party_balances(&snapshot.purchase_invoices, PartySide::Supplier);

        Self {
            window: *window,
            summary: financial_summary(ledger.iter().copied()),
            accounts: account_balances(ledger.iter().copied()),
            low_stock_count: low_stock.len(),
            low_stock_products: low_stock,
            total_customer_dues: customers.iter().fold(0.0, |acc, c| acc + c.outstanding),
            total_supplier_payables: suppliers.iter().fold(0.0, |acc, s| acc + s.outstanding),
            customers,
            suppliers,
            sales_invoice_status: StatusCounts::tally(&snapshot.sales_invoices),
            purchase_invoice_status: StatusCounts::tally(&snapshot.purchase_invoices),
        }
    }
}
