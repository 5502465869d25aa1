use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::party::{self, PartyRef, RawPartyRef};

/// Invoice as returned by `/invoices/sales`, `/invoices/purchases` or the quick-invoice endpoint.
///
/// `paid` is the legacy name of `amountPaid`; both may be present on old documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInvoice {
    #[serde(default, deserialize_with = "lenient::text")]
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount_paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount_due: Option<f64>,
    #[serde(default, deserialize_with = "party::party")]
    pub customer: Option<RawPartyRef>,
    #[serde(default, deserialize_with = "party::party")]
    pub supplier: Option<RawPartyRef>,
}

impl RawInvoice {
    /// Resolve payment fields: `amountPaid`, then legacy `paid`, then 0;
    /// `amountDue` when sent, else `max(0, total - paid)`.
    pub fn normalize(self) -> Invoice {
        let total = self.total.unwrap_or(0.0);
        let amount_paid = self.amount_paid.or(self.paid).unwrap_or(0.0);
        let amount_due = self
            .amount_due
            .unwrap_or_else(|| derived_due(total, amount_paid));

        Invoice {
            invoice_number: self.invoice_number,
            total,
            amount_paid,
            amount_due,
            customer: self.customer.map(RawPartyRef::normalize),
            supplier: self.supplier.map(RawPartyRef::normalize),
        }
    }
}

/// Canonical invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: Option<String>,
    pub total: f64,
    pub amount_paid: f64,
    pub amount_due: f64,
    pub customer: Option<PartyRef>,
    pub supplier: Option<PartyRef>,
}

impl Invoice {
    /// Invoice with the due amount derived from `total` and `amount_paid`.
    pub fn new(total: f64, amount_paid: f64) -> Self {
        Self {
            invoice_number: None,
            total,
            amount_paid,
            amount_due: derived_due(total, amount_paid),
            customer: None,
            supplier: None,
        }
    }

    /// Override the due amount (as when the backend sends `amountDue` explicitly).
    pub fn with_amount_due(mut self, amount_due: f64) -> Self {
        self.amount_due = amount_due;
        self
    }

    pub fn with_customer(mut self, customer: PartyRef) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_supplier(mut self, supplier: PartyRef) -> Self {
        self.supplier = Some(supplier);
        self
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer.as_ref().map(|p| p.name.as_str())
    }

    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_ref().map(|p| p.name.as_str())
    }
}

fn derived_due(total: f64, amount_paid: f64) -> f64 {
    (total - amount_paid).max(0.0)
}
