//! PWM output channel.

use super::create_instance;
use crate::registry::HardwareRegistry;
use hwio_common::hardware::{HardwareHandle, HardwareInterface, HardwareTable};
use hwio_common::setup::{ResultDescriptor, SetupDescriptor};
use std::any::Any;

/// Type tag of the PWM output channel.
pub const TAG: &str = "pwmoutput";

/// Kind label used in faults and diagnostics.
pub const KIND: &str = "PwmOutput";

/// A PWM output channel. Holds the last requested duty value only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PwmOutput {
    duty: u16,
}

impl PwmOutput {
    /// Create a channel with zero duty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new duty value.
    pub fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
    }

    /// Last stored duty value.
    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl HardwareInterface for PwmOutput {
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
        Some(serde_json::json!({ "duty": self.duty }).to_string())
    }
}

/// Bind [`TAG`] to [`create_pwm_output`].
pub fn register_pwm_output(registry: &mut HardwareRegistry) {
    registry.register(TAG, create_pwm_output);
}

/// Create a PWM output from `{ name }` and add it to `table`.
pub fn create_pwm_output(
    setup: &SetupDescriptor,
    log: &mut ResultDescriptor,
    table: &mut HardwareTable,
) -> bool {
    create_instance("create_pwm_output", KIND, setup, log, table, |_| {
        Ok(HardwareHandle::new(PwmOutput::new()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::OneWireBus;

    #[test]
    fn creates_channel_under_name() {
        let mut table = HardwareTable::new();
        let mut log = ResultDescriptor::new();
        let setup = SetupDescriptor::new().with("name", "ch1");

        assert!(create_pwm_output(&setup, &mut log, &mut table));
        assert!(log.is_empty());
        assert!(table.contains("ch1"));
        assert_eq!(table.get("ch1").unwrap().kind(), "PwmOutput");
    }

    #[test]
    fn missing_name_fails_with_fault() {
        let mut table = HardwareTable::new();
        let mut log = ResultDescriptor::new();

        assert!(!create_pwm_output(&SetupDescriptor::new(), &mut log, &mut table));
        assert!(table.is_empty());
        assert_eq!(log.fault(), Some("No Name given for PwmOutput Interface"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut table = HardwareTable::new();
        let mut log = ResultDescriptor::new();
        let setup = SetupDescriptor::new().with("name", "ch1").with("channel", 3);

        assert!(create_pwm_output(&setup, &mut log, &mut table));
        assert_eq!(table.get_as::<PwmOutput>("ch1").unwrap().duty(), 0);
    }

    #[test]
    fn handle_is_mutable_through_table() {
        let mut table = HardwareTable::new();
        let setup = SetupDescriptor::new().with("name", "ch1");
        assert!(create_pwm_output(&setup, &mut ResultDescriptor::new(), &mut table));

        table.get_as_mut::<PwmOutput>("ch1").unwrap().set_duty(512);
        assert_eq!(table.get_as::<PwmOutput>("ch1").unwrap().duty(), 512);
        assert!(table.get_as::<OneWireBus>("ch1").is_err());
    }
}
