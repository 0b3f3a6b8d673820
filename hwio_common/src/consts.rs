//! System-wide constants for the HWIO workspace.
//!
//! Single source of truth for descriptor keys, log targets and default paths.

/// Canonical service name (root span of the dispatcher binary).
pub const HWIO_SERVICE_NAME: &str = "hwio";

/// `tracing` target used by every hardware factory event.
pub const HARDWARE_LOG_TARGET: &str = "hardware";

/// Setup Descriptor key holding the user-chosen instance name.
pub const NAME_KEY: &str = "name";

/// Result Descriptor key a failed factory writes its reason into.
pub const FAULT_KEY: &str = "Fault";

/// Default hardware configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hwio/hardware.toml";
