//! HWIO Common Library
//!
//! Shared data model for the dynamic hardware-interface registry: the
//! descriptors a factory consumes and produces, the type-erased hardware
//! handle, the name-keyed mapping table and configuration loading.
//!
//! # Module Structure
//!
//! - [`setup`] - Setup Descriptor (factory input) and Result Descriptor (diagnostic output)
//! - [`hardware`] - `HardwareInterface` trait, `HardwareHandle`, `HardwareTable`, errors
//! - [`config`] - Configuration loading traits and the hardware config file
//! - [`consts`] - Descriptor keys, log targets and default paths
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use hwio_common::prelude::*;
//!
//! let setup = SetupDescriptor::new().with("name", "bus1").with("pin", 4);
//! assert_eq!(setup.name(), Some("bus1"));
//! ```

pub mod config;
pub mod consts;
pub mod hardware;
pub mod prelude;
pub mod setup;
