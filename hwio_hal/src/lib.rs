//! # HWIO HAL Library
//!
//! Dynamic hardware-interface registry: driver type tags are bound to
//! factory functions at startup, and configuration entries are turned into
//! named, owned hardware handles at runtime.
//!
//! # Module Structure
//!
//! - [`registry`] - Type tag → factory registration
//! - [`drivers`] - Per-driver registration and factory functions
//! - [`dispatcher`] - Reference dispatcher driving factories from config
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        hwio_hal                                  │
//! │  ┌──────────────────┐  register_*()  ┌────────────────────────┐  │
//! │  │  drivers/        │───────────────►│  HardwareRegistry      │  │
//! │  │  onewire, pwm    │                │  tag → factory         │  │
//! │  └──────────────────┘                └───────────┬────────────┘  │
//! │                                                  │ by value      │
//! │                                                  ▼               │
//! │  ┌──────────────────┐  create_*()    ┌────────────────────────┐  │
//! │  │  HardwareTable   │◄───────────────│  HardwareDispatcher    │  │
//! │  │  name → handle   │                │  (config entries)      │  │
//! │  └──────────────────┘                └────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod dispatcher;
pub mod drivers;
pub mod registry;

// Re-export key types for convenience
pub use crate::dispatcher::{EntryOutcome, HardwareDispatcher, SetupReport};
pub use crate::drivers::register_all_hardware;
pub use crate::registry::HardwareRegistry;
