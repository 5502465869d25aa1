//! Point-in-time copy of the backend collections the dashboard reads.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;

use tradebook_records::{
    Invoice, Product, RawInvoice, RawProduct, RawTransaction, Transaction, normalize_collection,
};

use crate::error::SnapshotError;

/// Body of `GET /transactions`.
pub const TRANSACTIONS_FILE: &str = "transactions.json";
/// Body of `GET /invoices/sales`.
pub const SALES_INVOICES_FILE: &str = "sales_invoices.json";
/// Body of `GET /invoices/purchases`.
pub const PURCHASE_INVOICES_FILE: &str = "purchase_invoices.json";
/// Body of `GET /products`.
pub const PRODUCTS_FILE: &str = "products.json";

/// Normalized collections, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub sales_invoices: Vec<Invoice>,
    pub purchase_invoices: Vec<Invoice>,
    pub products: Vec<Product>,
}

impl Snapshot {
    /// Normalize raw response bodies. Bodies that are not arrays count as empty.
    pub fn from_values(
        transactions: &JsonValue,
        sales_invoices: &JsonValue,
        purchase_invoices: &JsonValue,
        products: &JsonValue,
    ) -> Self {
        Self {
            transactions: normalize_collection::<RawTransaction>(transactions),
            sales_invoices: normalize_collection::<RawInvoice>(sales_invoices),
            purchase_invoices: normalize_collection::<RawInvoice>(purchase_invoices),
            products: normalize_collection::<RawProduct>(products),
        }
    }

    /// Load the four collection files from `dir`.
    ///
    /// A missing file is an empty collection; a file that is present but not
    /// JSON is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(SnapshotError::NotADirectory(dir.to_path_buf()));
        }

        let transactions = read_collection(&dir.join(TRANSACTIONS_FILE))?;
        let sales = read_collection(&dir.join(SALES_INVOICES_FILE))?;
        let purchases = read_collection(&dir.join(PURCHASE_INVOICES_FILE))?;
        let products = read_collection(&dir.join(PRODUCTS_FILE))?;

        let snapshot = Self::from_values(&transactions, &sales, &purchases, &products);
        tracing::info!(
            dir = %dir.display(),
            transactions = snapshot.transactions.len(),
            sales_invoices = snapshot.sales_invoices.len(),
            purchase_invoices = snapshot.purchase_invoices.len(),
            products = snapshot.products.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}

fn read_collection(path: &Path) -> Result<JsonValue, SnapshotError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "collection file missing; treating as empty");
            return Ok(JsonValue::Null);
        }
        Err(source) => {
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
