//! Hardware driver factories.
//!
//! Each submodule covers one driver type and exposes:
//!
//! - a type tag constant (`TAG`)
//! - a registration function binding the tag in a [`HardwareRegistry`]
//! - a factory function matching [`HardwareFactory`]
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement `HardwareInterface` for the driver type
//! 3. Write the factory on top of [`create_instance`]
//! 4. Call the registration function from [`register_all_hardware`]
//!
//! [`HardwareFactory`]: hwio_common::hardware::HardwareFactory

pub mod onewire;
pub mod pwm_output;

pub use onewire::{OneWireBus, create_onewire, register_onewire};
pub use pwm_output::{PwmOutput, create_pwm_output, register_pwm_output};

use crate::registry::HardwareRegistry;
use hwio_common::consts::HARDWARE_LOG_TARGET;
use hwio_common::hardware::{HardwareError, HardwareHandle, HardwareTable};
use hwio_common::setup::{ResultDescriptor, SetupDescriptor};
use tracing::{debug, error, info};

/// Register every built-in hardware type.
///
/// Call once at startup, before the registry is handed to the dispatcher.
pub fn register_all_hardware(registry: &mut HardwareRegistry) {
    register_onewire(registry);
    register_pwm_output(registry);
}

/// Algorithm shared by all factories.
///
/// 1. Read `name` from `setup`; absent or empty fails with
///    `MissingInstanceName`.
/// 2. Run `construct` to extract driver fields and build the handle.
/// 3. Insert the handle into `table` under `name`.
///
/// Any failure is written to `log` as `Fault`, logged, and leaves `table`
/// untouched. Returns `true` only when the handle was inserted.
pub fn create_instance<F>(
    func: &'static str,
    kind: &'static str,
    setup: &SetupDescriptor,
    log: &mut ResultDescriptor,
    table: &mut HardwareTable,
    construct: F,
) -> bool
where
    F: FnOnce(&SetupDescriptor) -> Result<HardwareHandle, HardwareError>,
{
    debug!(target: HARDWARE_LOG_TARGET, func, "Start");

    let created = setup
        .name()
        .ok_or(HardwareError::MissingInstanceName { kind })
        .and_then(|name| {
            let handle = construct(setup)?;
            // A handle displaced under the replace policy is released here.
            table.insert(name, handle)?;
            Ok(name)
        });

    match created {
        Ok(name) => {
            info!(target: HARDWARE_LOG_TARGET, func, name, "Created");
            true
        }
        Err(err) => {
            error!(target: HARDWARE_LOG_TARGET, func, "{err}");
            log.set_fault(&err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_all_binds_builtin_tags() {
        let mut registry = HardwareRegistry::new();
        register_all_hardware(&mut registry);
        assert_eq!(registry.list_types(), vec!["onewire", "pwmoutput"]);
    }

    #[test]
    fn register_all_is_idempotent() {
        let mut registry = HardwareRegistry::new();
        register_all_hardware(&mut registry);
        register_all_hardware(&mut registry);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn construct_failure_is_reported_like_missing_name() {
        let mut log = ResultDescriptor::new();
        let mut table = HardwareTable::new();
        let setup = SetupDescriptor::new().with("name", "x");

        let done = create_instance("create_test", "Test", &setup, &mut log, &mut table, |_| {
            Err(HardwareError::MissingField {
                kind: "Test",
                field: "pin",
            })
        });

        assert!(!done);
        assert!(table.is_empty());
        assert_eq!(log.fault(), Some("Field 'pin' missing for Test Interface"));
    }

    #[test]
    fn construct_is_skipped_without_name() {
        let mut log = ResultDescriptor::new();
        let mut table = HardwareTable::new();
        let mut called = false;

        let done = create_instance(
            "create_test",
            "Test",
            &SetupDescriptor::new(),
            &mut log,
            &mut table,
            |_| {
                called = true;
                Ok(HardwareHandle::new(PwmOutput::new()))
            },
        );

        assert!(!done);
        assert!(!called);
        assert_eq!(log.fault(), Some("No Name given for Test Interface"));
    }
}
