//! Hardware creation and lookup errors.

use thiserror::Error;

/// Error types for hardware creation and lookup.
///
/// The `Display` text of the creation variants is what a factory writes
/// into the Result Descriptor's `Fault` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    /// The setup's `name` field is absent, empty or not a string.
    #[error("No Name given for {kind} Interface")]
    MissingInstanceName {
        /// Driver kind label (e.g. "OneWire")
        kind: &'static str,
    },

    /// A required driver-specific field is absent.
    #[error("Field '{field}' missing for {kind} Interface")]
    MissingField {
        /// Driver kind label
        kind: &'static str,
        /// Setup field name
        field: &'static str,
    },

    /// A driver-specific field has the wrong type or is out of range.
    #[error("Field '{field}' invalid for {kind} Interface: {reason}")]
    InvalidField {
        /// Driver kind label
        kind: &'static str,
        /// Setup field name
        field: &'static str,
        /// Human-readable cause
        reason: String,
    },

    /// The table already holds an instance with this name.
    #[error("Hardware name '{0}' already in use")]
    DuplicateName(String),

    /// No factory is registered for the type tag.
    #[error("Unknown hardware type '{0}'")]
    UnknownType(String),

    /// Checked handle recovery asked for the wrong concrete type.
    #[error("Hardware '{name}' is a {actual} interface, not {expected}")]
    TypeMismatch {
        /// Instance name
        name: String,
        /// Requested Rust type
        expected: &'static str,
        /// Kind label of the stored driver
        actual: &'static str,
    },

    /// No instance with this name exists.
    #[error("Hardware '{0}' not found")]
    NotFound(String),
}
