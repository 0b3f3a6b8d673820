//! Hardware Mapping Table — name-keyed store of live driver instances.
//!
//! Entries are created only by successful factory invocations. There is no
//! deletion API; a `Replace` policy is the only way an entry changes, and
//! the displaced handle is handed back to the caller so it is dropped, not
//! leaked.

use std::any::type_name;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;
use tracing::warn;

use super::error::HardwareError;
use super::handle::{HardwareHandle, HardwareInterface};
use crate::consts::HARDWARE_LOG_TARGET;

/// What `HardwareTable::insert` does when the name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the existing entry and fail the insertion.
    #[default]
    Reject,
    /// Store the new handle and release the previous one.
    Replace,
}

/// Mapping from instance name to hardware handle.
#[derive(Debug, Default)]
pub struct HardwareTable {
    entries: BTreeMap<String, HardwareHandle>,
    policy: DuplicatePolicy,
}

assert_impl_all!(HardwareTable: Send, Sync);

impl HardwareTable {
    /// Create an empty table rejecting duplicate names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: BTreeMap::new(),
            policy,
        }
    }

    /// Active duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Insert `handle` under `name`.
    ///
    /// Returns the displaced handle when the policy is `Replace` and the name
    /// was already taken.
    ///
    /// # Errors
    /// - `HardwareError::MissingInstanceName` if `name` is empty
    /// - `HardwareError::DuplicateName` if the name is taken under `Reject`
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        handle: HardwareHandle,
    ) -> Result<Option<HardwareHandle>, HardwareError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HardwareError::MissingInstanceName {
                kind: handle.kind(),
            });
        }

        match (self.entries.contains_key(&name), self.policy) {
            (true, DuplicatePolicy::Reject) => Err(HardwareError::DuplicateName(name)),
            (true, DuplicatePolicy::Replace) => {
                warn!(
                    target: HARDWARE_LOG_TARGET,
                    name = %name,
                    "Replacing existing hardware instance"
                );
                Ok(self.entries.insert(name, handle))
            }
            (false, _) => Ok(self.entries.insert(name, handle)),
        }
    }

    /// Look up a handle by name.
    pub fn get(&self, name: &str) -> Option<&HardwareHandle> {
        self.entries.get(name)
    }

    /// Mutably look up a handle by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut HardwareHandle> {
        self.entries.get_mut(name)
    }

    /// Look up a handle by name and recover its concrete driver type.
    ///
    /// # Errors
    /// - `HardwareError::NotFound` if no entry has this name
    /// - `HardwareError::TypeMismatch` if the entry holds another driver type
    pub fn get_as<T: HardwareInterface>(&self, name: &str) -> Result<&T, HardwareError> {
        let handle = self
            .entries
            .get(name)
            .ok_or_else(|| HardwareError::NotFound(name.to_string()))?;
        let actual = handle.kind();
        handle
            .downcast_ref::<T>()
            .ok_or_else(|| HardwareError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
                actual,
            })
    }

    /// Mutable variant of [`HardwareTable::get_as`].
    ///
    /// # Errors
    /// Same as [`HardwareTable::get_as`].
    pub fn get_as_mut<T: HardwareInterface>(
        &mut self,
        name: &str,
    ) -> Result<&mut T, HardwareError> {
        let handle = self
            .entries
            .get_mut(name)
            .ok_or_else(|| HardwareError::NotFound(name.to_string()))?;
        let actual = handle.kind();
        handle
            .downcast_mut::<T>()
            .ok_or_else(|| HardwareError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
                actual,
            })
    }

    /// True if an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instance names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, handle)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HardwareHandle)> {
        self.entries.iter().map(|(name, handle)| (name.as_str(), handle))
    }
}
