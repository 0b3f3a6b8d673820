//! OneWire bus controller.

use super::create_instance;
use crate::registry::HardwareRegistry;
use hwio_common::hardware::{HardwareHandle, HardwareInterface, HardwareTable};
use hwio_common::setup::{ResultDescriptor, SetupDescriptor};
use std::any::Any;

/// Type tag of the OneWire bus controller.
pub const TAG: &str = "onewire";

/// Kind label used in faults and diagnostics.
pub const KIND: &str = "OneWire";

/// A OneWire bus bound to one GPIO pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneWireBus {
    pin: u8,
}

impl OneWireBus {
    /// Create a bus controller on `pin`.
    pub fn new(pin: u8) -> Self {
        Self { pin }
    }

    /// GPIO pin carrying the bus.
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl HardwareInterface for OneWireBus {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn diagnostics(&self) -> Option<String> {
        Some(serde_json::json!({ "pin": self.pin }).to_string())
    }
}

/// Bind [`TAG`] to [`create_onewire`].
pub fn register_onewire(registry: &mut HardwareRegistry) {
    registry.register(TAG, create_onewire);
}

/// Create a OneWire bus from `{ name, pin }` and add it to `table`.
pub fn create_onewire(
    setup: &SetupDescriptor,
    log: &mut ResultDescriptor,
    table: &mut HardwareTable,
) -> bool {
    create_instance("create_onewire", KIND, setup, log, table, |setup| {
        let pin = setup.require_u8(KIND, "pin")?;
        Ok(HardwareHandle::new(OneWireBus::new(pin)))
    })
}
