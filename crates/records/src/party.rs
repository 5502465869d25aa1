//! Customer / supplier references embedded in transactions and invoices.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use tradebook_core::PartyId;

use crate::lenient;

/// Embedded party as the backend sends it.
///
/// Only populated references (objects) carry a name; a bare id string is an
/// unpopulated reference and decodes to `None` at the field level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawPartyRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl RawPartyRef {
    /// Decode from any JSON value; non-objects yield `None`.
    pub fn from_value(value: &JsonValue) -> Option<Self> {
        let map = value.as_object()?;
        let id = map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(lenient::text_from_value);
        let name = map.get("name").and_then(lenient::text_from_value);
        Some(Self { id, name })
    }

    pub fn normalize(self) -> PartyRef {
        PartyRef {
            id: self.id.and_then(|id| PartyId::new(id).ok()),
            name: self.name.unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for RawPartyRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

/// Canonical party reference.
///
/// `name` is compared byte-for-byte (case-sensitive, untrimmed) when
/// associating records with a party; `id` is only present when the backend
/// populated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: Option<PartyId>,
    pub name: String,
}

impl PartyRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: PartyId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Field decoder: populated party object or nothing.
pub(crate) fn party<'de, D>(deserializer: D) -> Result<Option<RawPartyRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient::any(deserializer)?;
    Ok(value.as_ref().and_then(RawPartyRef::from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn populated_reference_keeps_id_and_name() {
        let raw = RawPartyRef::from_value(&json!({"_id": "c-1", "name": "Alice", "phone": "555"}))
            .unwrap();
        let party = raw.normalize();
        assert_eq!(party.name, "Alice");
        assert_eq!(party.id.as_ref().map(PartyId::as_str), Some("c-1"));
    }

    #[test]
    fn bare_id_is_not_a_party() {
        assert!(RawPartyRef::from_value(&json!("c-1")).is_none());
    }

    #[test]
    fn blank_id_is_dropped_and_missing_name_is_empty() {
        let party = RawPartyRef::from_value(&json!({"id": " "})).unwrap().normalize();
        assert_eq!(party.id, None);
        assert_eq!(party.name, "");
    }
}
