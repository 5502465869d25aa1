//! `tradebook-records` — record shapes fetched from the invoicing backend.
//!
//! Two layers live here:
//! - `Raw*` wire shapes, deserialized leniently from whatever JSON the API returns
//!   (missing fields, legacy aliases, numbers sent as strings).
//! - canonical records (`Transaction`, `Invoice`, `Product`) produced by a single
//!   normalization pass, so downstream aggregation never deals with fallbacks.

pub mod collection;
pub mod invoice;
pub mod party;
pub mod product;
pub mod transaction;

mod lenient;

pub use lenient::parse_timestamp;

pub use collection::{Normalize, normalize_collection, parse_collection};
pub use invoice::{Invoice, RawInvoice};
pub use party::{PartyRef, RawPartyRef};
pub use product::{DEFAULT_REORDER_THRESHOLD, Product, RawProduct, RawStock, StockLevel};
pub use transaction::{Category, RawTransaction, Transaction, TransactionKind, UNKNOWN_ACCOUNT};
