use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use tradebook_core::ProductId;

use crate::lenient;

/// Reorder threshold assumed when a product carries none.
pub const DEFAULT_REORDER_THRESHOLD: f64 = 10.0;

/// `stock` as stored: a nested object on current documents, a bare number on legacy ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStock {
    Nested {
        current: Option<f64>,
        #[serde(rename = "reorderThreshold")]
        reorder_threshold: Option<f64>,
    },
    Flat(f64),
}

impl RawStock {
    fn from_value(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(map) => Some(Self::Nested {
                current: map.get("current").and_then(lenient::number_from_value),
                reorder_threshold: map
                    .get("reorderThreshold")
                    .and_then(lenient::number_from_value),
            }),
            other => lenient::number_from_value(other).map(Self::Flat),
        }
    }
}

fn stock<'de, D>(deserializer: D) -> Result<Option<RawStock>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient::any(deserializer)?;
    Ok(value.as_ref().and_then(RawStock::from_value))
}

/// Product as returned by `/products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(rename = "_id", default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "stock")]
    pub stock: Option<RawStock>,
    /// Legacy top-level threshold.
    #[serde(default, deserialize_with = "lenient::number")]
    pub reorder_threshold: Option<f64>,
}

impl RawProduct {
    /// Nested `stock.current` / `stock.reorderThreshold` win; legacy flat fields
    /// are used otherwise; stock defaults to 0 and the threshold to
    /// [`DEFAULT_REORDER_THRESHOLD`].
    pub fn normalize(self) -> Product {
        let (current, nested_threshold) = match self.stock {
            Some(RawStock::Nested {
                current,
                reorder_threshold,
            }) => (current, reorder_threshold),
            Some(RawStock::Flat(current)) => (Some(current), None),
            None => (None, None),
        };

        Product {
            id: self.id.and_then(|id| ProductId::new(id).ok()),
            name: self.name.unwrap_or_default(),
            stock: StockLevel {
                current: current.unwrap_or(0.0),
                reorder_threshold: nested_threshold
                    .or(self.reorder_threshold)
                    .unwrap_or(DEFAULT_REORDER_THRESHOLD),
            },
        }
    }
}

/// Stock position of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub current: f64,
    pub reorder_threshold: f64,
}

impl StockLevel {
    /// At or below the reorder threshold.
    pub fn is_low(&self) -> bool {
        self.current <= self.reorder_threshold
    }
}

/// Canonical product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<ProductId>,
    pub name: String,
    pub stock: StockLevel,
}

impl Product {
    pub fn new(name: impl Into<String>, current: f64, reorder_threshold: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            stock: StockLevel {
                current,
                reorder_threshold,
            },
        }
    }
}
