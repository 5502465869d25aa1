//! Per-party statement figures for the customer and supplier ledgers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tradebook_records::Invoice;

use crate::dues::PartySide;
use crate::status::{PaymentStatus, payment_status};

/// Invoice totals for one customer or supplier.
///
/// `outstanding` is the same figure [`crate::customer_dues`] /
/// [`crate::supplier_payables`] report for `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyBalance {
    pub name: String,
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub outstanding: f64,
    pub invoice_count: usize,
    pub open_invoice_count: usize,
}

impl PartyBalance {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_invoiced: 0.0,
            total_paid: 0.0,
            outstanding: 0.0,
            invoice_count: 0,
            open_invoice_count: 0,
        }
    }
}

/// One balance per distinct party name on `side`, in order of first appearance.
///
/// Invoices without that party, or with an empty name, are skipped.
pub fn party_balances(invoices: &[Invoice], side: PartySide) -> Vec<PartyBalance> {
    let mut order: Vec<PartyBalance> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for inv in invoices {
        let Some(party) = side.party_of(inv) else {
            continue;
        };
        if party.name.is_empty() {
            continue;
        }

        let slot = *slots.entry(party.name.as_str()).or_insert_with(|| {
            order.push(PartyBalance::new(&party.name));
            order.len() - 1
        });

        let balance = &mut order[slot];
        balance.total_invoiced += inv.total;
        balance.total_paid += inv.amount_paid;
        balance.outstanding += inv.amount_due;
        balance.invoice_count += 1;
        if payment_status(inv) != PaymentStatus::FullyPaid {
            balance.open_invoice_count += 1;
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{customer_dues, fixtures, supplier_payables};
    use serde_json::json;

    #[test]
    fn customer_ledger_rows() {
        let invoices = fixtures::invoices(json!([
            {"customer": {"name": "Alice"}, "total": 500, "amountPaid": 200},
            {"customer": {"name": "Bob"}, "total": 300, "amountPaid": 300},
            {"customer": {"name": "Alice"}, "total": 100},
            {"supplier": {"name": "Acme"}, "total": 80}
        ]));

        let rows = party_balances(&invoices, PartySide::Customer);
        assert_eq!(rows.len(), 2);

        let alice = &rows[0];
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.total_invoiced, 600.0);
        assert_eq!(alice.total_paid, 200.0);
        assert_eq!(alice.outstanding, 400.0);
        assert_eq!((alice.invoice_count, alice.open_invoice_count), (2, 2));

        let bob = &rows[1];
        assert_eq!(bob.outstanding, 0.0);
        assert_eq!(bob.open_invoice_count, 0);

        for row in &rows {
            assert_eq!(row.outstanding, customer_dues(&invoices, &row.name));
        }
    }

    #[test]
    fn supplier_ledger_matches_payables() {
        let invoices = fixtures::invoices(json!([
            {"supplier": {"name": "Acme"}, "total": 80, "paid": 20},
            {"supplier": {"name": ""}, "total": 10},
            {"supplier": "65a0f0", "total": 10}
        ]));

        let rows = party_balances(&invoices, PartySide::Supplier);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].outstanding, supplier_payables(&invoices, "Acme"));
        assert_eq!(rows[0].outstanding, 60.0);
    }
}
