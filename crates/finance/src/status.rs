use serde::{Deserialize, Serialize};

use tradebook_records::Invoice;

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    FullyPaid,
    PartiallyPaid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::FullyPaid => "fully_paid",
            PaymentStatus::PartiallyPaid => "partially_paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

impl core::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nothing due means fully paid, even for a zero-value invoice.
pub fn payment_status(invoice: &Invoice) -> PaymentStatus {
    let due = invoice.amount_due;
    if due <= 0.0 {
        PaymentStatus::FullyPaid
    } else if invoice.amount_paid > 0.0 {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Unpaid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    #[test]
    fn settlement_states() {
        assert_eq!(payment_status(&Invoice::new(1000.0, 1000.0)), PaymentStatus::FullyPaid);
        assert_eq!(payment_status(&Invoice::new(1000.0, 400.0)), PaymentStatus::PartiallyPaid);
        assert_eq!(payment_status(&Invoice::new(1000.0, 0.0)), PaymentStatus::Unpaid);
    }

    #[test]
    fn zero_value_invoice_reads_as_fully_paid() {
        assert_eq!(payment_status(&Invoice::new(0.0, 0.0)), PaymentStatus::FullyPaid);
    }

    #[test]
    fn explicit_due_overrides_derivation() {
        let inv = Invoice::new(1000.0, 1000.0).with_amount_due(50.0);
        assert_eq!(payment_status(&inv), PaymentStatus::PartiallyPaid);

        let inv = Invoice::new(1000.0, 0.0).with_amount_due(0.0);
        assert_eq!(payment_status(&inv), PaymentStatus::FullyPaid);
    }

    #[test]
    fn legacy_paid_field_counts_as_payment() {
        let invoices = fixtures::invoices(json!([{"total": 100, "paid": 10}]));
        assert_eq!(payment_status(&invoices[0]), PaymentStatus::PartiallyPaid);
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_value(PaymentStatus::PartiallyPaid).unwrap(),
            json!("partially_paid")
        );
        assert_eq!(PaymentStatus::FullyPaid.to_string(), "fully_paid");
    }
}
