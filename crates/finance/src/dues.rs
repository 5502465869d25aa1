//! Outstanding balances per customer (dues) and per supplier (payables).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tradebook_records::{Invoice, PartyRef};

/// Which party of an invoice to associate it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartySide {
    Customer,
    Supplier,
}

impl PartySide {
    pub fn party_of<'a>(&self, invoice: &'a Invoice) -> Option<&'a PartyRef> {
        match self {
            PartySide::Customer => invoice.customer.as_ref(),
            PartySide::Supplier => invoice.supplier.as_ref(),
        }
    }
}

/// How a lookup key is compared against an invoice's party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyMatch {
    /// Exact, case-sensitive name equality. Compatible with existing data.
    #[default]
    ByName,
    /// Backend identifier equality. Parties without an id never match.
    ById,
}

impl PartyMatch {
    fn key_of<'a>(&self, party: &'a PartyRef) -> Option<&'a str> {
        match self {
            PartyMatch::ByName => Some(party.name.as_str()),
            PartyMatch::ById => party.id.as_ref().map(|id| id.as_str()),
        }
    }
}

/// Sum of `amount_due` over the invoices whose `side` party matches `key`.
///
/// An empty key matches nothing.
pub fn party_dues(invoices: &[Invoice], side: PartySide, matching: PartyMatch, key: &str) -> f64 {
    if key.is_empty() {
        return 0.0;
    }

    invoices
        .iter()
        .filter(|inv| {
            side.party_of(inv)
                .and_then(|p| matching.key_of(p))
                .is_some_and(|k| k == key)
        })
        // Seeded with +0.0: an empty f64 `sum()` is -0.0.
        .fold(0.0, |acc, inv| acc + inv.amount_due)
}

/// What `customer_name` still owes across `invoices`.
pub fn customer_dues(invoices: &[Invoice], customer_name: &str) -> f64 {
    party_dues(invoices, PartySide::Customer, PartyMatch::ByName, customer_name)
}

/// What is still owed to `supplier_name` across `invoices`.
pub fn supplier_payables(invoices: &[Invoice], supplier_name: &str) -> f64 {
    party_dues(invoices, PartySide::Supplier, PartyMatch::ByName, supplier_name)
}

/// Dues for every party, grouped once.
///
/// For tables that show one row per customer: `get` returns exactly what
/// [`party_dues`] would for the same invoices, side and matching, without
/// rescanning the invoice list per row.
#[derive(Debug, Clone, PartialEq)]
pub struct DueIndex {
    side: PartySide,
    matching: PartyMatch,
    dues: HashMap<String, f64>,
}

impl DueIndex {
    pub fn build(invoices: &[Invoice], side: PartySide, matching: PartyMatch) -> Self {
        let mut dues: HashMap<String, f64> = HashMap::new();

        for inv in invoices {
            let Some(key) = side.party_of(inv).and_then(|p| matching.key_of(p)) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            *dues.entry(key.to_string()).or_insert(0.0) += inv.amount_due;
        }

        tracing::trace!(?side, ?matching, parties = dues.len(), "built due index");

        Self {
            side,
            matching,
            dues,
        }
    }

    pub fn customers(invoices: &[Invoice]) -> Self {
        Self::build(invoices, PartySide::Customer, PartyMatch::ByName)
    }

    pub fn suppliers(invoices: &[Invoice]) -> Self {
        Self::build(invoices, PartySide::Supplier, PartyMatch::ByName)
    }

    pub fn side(&self) -> PartySide {
        self.side
    }

    pub fn matching(&self) -> PartyMatch {
        self.matching
    }

    pub fn get(&self, key: &str) -> f64 {
        self.dues.get(key).copied().unwrap_or(0.0)
    }

    /// Number of distinct parties seen.
    pub fn len(&self) -> usize {
        self.dues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dues.is_empty()
    }
}
