//! Prelude module for common re-exports.
//!
//! `use hwio_common::prelude::*;` brings in the types every driver module
//! and dispatcher needs without listing individual paths.

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{
    ConfigError, ConfigLoader, DispatcherConfig, HardwareConfig, HardwareEntry, LogLevel,
    SharedConfig,
};

// ─── Descriptors ────────────────────────────────────────────────────
pub use crate::setup::{ResultDescriptor, SetupDescriptor};

// ─── Hardware ───────────────────────────────────────────────────────
pub use crate::hardware::{
    DuplicatePolicy, HardwareError, HardwareFactory, HardwareHandle, HardwareInterface,
    HardwareTable,
};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{FAULT_KEY, HARDWARE_LOG_TARGET, NAME_KEY};
