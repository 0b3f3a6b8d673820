//! Setup and Result descriptors.
//!
//! A [`SetupDescriptor`] is the read-only, ordered key/value view of one
//! hardware configuration entry handed to a factory. A [`ResultDescriptor`]
//! is the write-only diagnostic output the factory fills on failure and the
//! dispatcher inspects afterwards.
//!
//! Both are thin wrappers around an insertion-ordered `serde_json::Map`, so
//! values may be strings, integers or nested structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{FAULT_KEY, NAME_KEY};
use crate::hardware::HardwareError;

/// Read-only configuration input to a factory function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetupDescriptor(Map<String, Value>);

impl SetupDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a field, builder style. Later values for the same key replace
    /// earlier ones but keep the original position.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field access. `None` if absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The instance name, if present as a non-empty string.
    ///
    /// A non-string `name` counts as absent.
    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_KEY).filter(|name| !name.is_empty())
    }

    /// Extract a required unsigned 8-bit field.
    ///
    /// # Errors
    /// - `HardwareError::MissingField` if `field` is absent
    /// - `HardwareError::InvalidField` if it is not an integer in `0..=255`
    pub fn require_u8(&self, kind: &'static str, field: &'static str) -> Result<u8, HardwareError> {
        let value = self
            .get(field)
            .ok_or(HardwareError::MissingField { kind, field })?;

        let number = value.as_u64().ok_or_else(|| HardwareError::InvalidField {
            kind,
            field,
            reason: format!("expected an unsigned integer, got {value}"),
        })?;

        u8::try_from(number).map_err(|_| HardwareError::InvalidField {
            kind,
            field,
            reason: format!("{number} is out of range 0..=255"),
        })
    }

    /// Field names in configuration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the descriptor holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for SetupDescriptor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Write-only diagnostic output of a factory function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultDescriptor(Map<String, Value>);

impl ResultDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Write a diagnostic field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Record `error` as the `Fault` field.
    pub fn set_fault(&mut self, error: &HardwareError) {
        self.set(FAULT_KEY, error.to_string());
    }

    /// The recorded fault text, if any.
    pub fn fault(&self) -> Option<&str> {
        self.0.get(FAULT_KEY).and_then(Value::as_str)
    }

    /// True if a `Fault` field has been written.
    pub fn has_fault(&self) -> bool {
        self.0.contains_key(FAULT_KEY)
    }

    /// Raw field access for the dispatcher.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_non_empty_string() {
        assert_eq!(SetupDescriptor::new().with("name", "bus1").name(), Some("bus1"));
        assert_eq!(SetupDescriptor::new().with("name", "").name(), None);
        assert_eq!(SetupDescriptor::new().with("name", 7).name(), None);
        assert_eq!(SetupDescriptor::new().with("pin", 4).name(), None);
    }

    #[test]
    fn keys_keep_insertion_order() {
        let setup = SetupDescriptor::new()
            .with("pin", 4)
            .with("name", "bus1")
            .with("alias", "front");
        let keys: Vec<&str> = setup.keys().collect();
        assert_eq!(keys, vec!["pin", "name", "alias"]);
        assert_eq!(setup.len(), 3);
    }

    #[test]
    fn require_u8_accepts_in_range_value() {
        let setup = SetupDescriptor::new().with("pin", 255);
        assert_eq!(setup.require_u8("OneWire", "pin"), Ok(255));
    }

    #[test]
    fn require_u8_reports_missing_field() {
        let setup = SetupDescriptor::new();
        assert_eq!(
            setup.require_u8("OneWire", "pin"),
            Err(HardwareError::MissingField {
                kind: "OneWire",
                field: "pin"
            })
        );
    }

    #[test]
    fn require_u8_rejects_out_of_range_and_wrong_type() {
        let too_big = SetupDescriptor::new().with("pin", 256);
        assert!(matches!(
            too_big.require_u8("OneWire", "pin"),
            Err(HardwareError::InvalidField { field: "pin", .. })
        ));

        let negative = SetupDescriptor::new().with("pin", -1);
        assert!(matches!(
            negative.require_u8("OneWire", "pin"),
            Err(HardwareError::InvalidField { .. })
        ));

        let text = SetupDescriptor::new().with("pin", "D4");
        assert!(matches!(
            text.require_u8("OneWire", "pin"),
            Err(HardwareError::InvalidField { .. })
        ));
    }

    #[test]
    fn result_descriptor_records_fault() {
        let mut log = ResultDescriptor::new();
        assert!(log.is_empty());
        assert!(!log.has_fault());

        log.set_fault(&HardwareError::MissingInstanceName { kind: "OneWire" });
        assert_eq!(log.fault(), Some("No Name given for OneWire Interface"));
        assert!(log.has_fault());
    }

    #[test]
    fn result_descriptor_serializes_as_json_object() {
        let mut log = ResultDescriptor::new();
        log.set(FAULT_KEY, "boom");
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"Fault":"boom"}"#);
    }
}
