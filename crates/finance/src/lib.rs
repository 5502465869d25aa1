//! `tradebook-finance` — dashboard and ledger figures derived from record snapshots.
//!
//! Pure functions only: inputs are borrowed, nothing is cached, nothing is mutated.
//! Every function is total; empty or degenerate input yields zeroed results.
//!
//! Customers and suppliers are associated with invoices by exact name equality
//! (case-sensitive, untrimmed). Two parties sharing a name are indistinguishable
//! on that path; [`PartyMatch::ById`] keys on the backend identifier instead.

pub mod accounts;
pub mod dues;
pub mod ledger;
pub mod period;
pub mod status;
pub mod stock;
pub mod summary;

pub use accounts::{AccountBalance, account_balances};
pub use dues::{DueIndex, PartyMatch, PartySide, customer_dues, party_dues, supplier_payables};
pub use ledger::{PartyBalance, party_balances};
pub use period::{DateWindow, financial_summary_in};
pub use status::{PaymentStatus, payment_status};
pub use stock::{low_stock_count, low_stock_products};
pub use summary::{FinancialSummary, financial_summary};
