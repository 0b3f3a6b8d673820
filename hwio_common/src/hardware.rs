//! Hardware handles, the mapping table and the factory contract.
//!
//! This module contains:
//! - `error`: the `HardwareError` taxonomy shared by factories and lookups.
//! - `handle`: the `HardwareInterface` capability trait and the owning,
//!   type-erased `HardwareHandle`.
//! - `table`: the name-keyed `HardwareTable` and its `DuplicatePolicy`.

pub mod error;
pub mod handle;
pub mod table;

pub use error::HardwareError;
pub use handle::{HardwareHandle, HardwareInterface};
pub use table::{DuplicatePolicy, HardwareTable};

use crate::setup::{ResultDescriptor, SetupDescriptor};

/// Factory function type bound to a type tag in the registry.
///
/// Returns `true` once a handle has been inserted into the table under the
/// setup's `name`. On `false` the table is untouched and `log` carries a
/// `Fault` entry.
pub type HardwareFactory = fn(&SetupDescriptor, &mut ResultDescriptor, &mut HardwareTable) -> bool;
