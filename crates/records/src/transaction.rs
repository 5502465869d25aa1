use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::party::{self, PartyRef, RawPartyRef};

/// Account bucket used when a transaction carries no account.
pub const UNKNOWN_ACCOUNT: &str = "unknown";

/// Ledger transaction kind.
///
/// Matching is exact and case-sensitive; anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Sale,
    Purchase,
    PaymentReceived,
    PaymentMade,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for TransactionKind {
    fn from(value: &str) -> Self {
        match value {
            "sale" => Self::Sale,
            "purchase" => Self::Purchase,
            "payment_received" => Self::PaymentReceived,
            "payment_made" => Self::PaymentMade,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Income/expense classification of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Income,
    Expense,
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "income" => Self::Income,
            "expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Transaction as returned by `/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub account: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "party::party")]
    pub customer: Option<RawPartyRef>,
    #[serde(default, deserialize_with = "party::party")]
    pub supplier: Option<RawPartyRef>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub due: Option<f64>,
}

impl RawTransaction {
    pub fn normalize(self) -> Transaction {
        Transaction {
            kind: TransactionKind::from(self.kind.as_deref().unwrap_or_default()),
            category: Category::from(self.category.as_deref().unwrap_or_default()),
            amount: self.amount.unwrap_or(0.0),
            // An empty account string buckets like a missing one.
            account: self.account.filter(|a| !a.is_empty()),
            date: self.date.as_deref().and_then(lenient::parse_timestamp),
            customer: self.customer.map(RawPartyRef::normalize),
            supplier: self.supplier.map(RawPartyRef::normalize),
            due: self.due.unwrap_or(0.0),
        }
    }
}

/// Canonical ledger transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub category: Category,
    pub amount: f64,
    pub account: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub customer: Option<PartyRef>,
    pub supplier: Option<PartyRef>,
    pub due: f64,
}

impl Transaction {
    pub fn new(kind: TransactionKind, category: Category, amount: f64) -> Self {
        Self {
            kind,
            category,
            amount,
            account: None,
            date: None,
            customer: None,
            supplier: None,
            due: 0.0,
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_due(mut self, due: f64) -> Self {
        self.due = due;
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

    /// Account bucket this transaction is attributed to.
    pub fn account_key(&self) -> &str {
        self.account.as_deref().unwrap_or(UNKNOWN_ACCOUNT)
    }
}
