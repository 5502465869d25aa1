//! Lenient decoding of whole collections.
//!
//! A fetched collection that is not an array decodes to nothing; elements that
//! cannot be read as the expected record are skipped and logged.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::{Invoice, Product, RawInvoice, RawProduct, RawTransaction, Transaction};

/// Raw wire shape that can be coerced into a canonical record.
pub trait Normalize {
    type Output;

    fn normalize(self) -> Self::Output;
}

impl Normalize for RawTransaction {
    type Output = Transaction;

    fn normalize(self) -> Transaction {
        RawTransaction::normalize(self)
    }
}

impl Normalize for RawInvoice {
    type Output = Invoice;

    fn normalize(self) -> Invoice {
        RawInvoice::normalize(self)
    }
}

impl Normalize for RawProduct {
    type Output = Product;

    fn normalize(self) -> Product {
        RawProduct::normalize(self)
    }
}

/// Decode every element of a JSON array as `R`, skipping the ones that fail.
pub fn parse_collection<R>(value: &JsonValue) -> Vec<R>
where
    R: DeserializeOwned,
{
    let Some(items) = value.as_array() else {
        if !value.is_null() {
            tracing::warn!(
                kind = json_kind(value),
                "expected a JSON array of records; treating collection as empty"
            );
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match R::deserialize(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unreadable record");
                None
            }
        })
        .collect()
}

/// Decode and normalize a collection in one pass.
pub fn normalize_collection<R>(value: &JsonValue) -> Vec<R::Output>
where
    R: DeserializeOwned + Normalize,
{
    parse_collection::<R>(value)
        .into_iter()
        .map(Normalize::normalize)
        .collect()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
