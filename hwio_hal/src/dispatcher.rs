//! Reference dispatcher.
//!
//! The `HardwareDispatcher` owns the populated `HardwareRegistry` and the
//! single shared `HardwareTable`. Taking the registry by value closes the
//! registration phase: once a dispatcher exists, only creation calls remain.

use crate::registry::HardwareRegistry;
use hwio_common::config::{DispatcherConfig, HardwareEntry};
use hwio_common::consts::HARDWARE_LOG_TARGET;
use hwio_common::hardware::{DuplicatePolicy, HardwareError, HardwareTable};
use hwio_common::setup::ResultDescriptor;
use serde::Serialize;
use tracing::{error, info, warn};

/// Outcome of one configuration entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutcome {
    /// Type tag of the entry.
    pub tag: String,
    /// Instance name, if the entry carried a usable one.
    pub name: Option<String>,
    /// True if a handle was added to the table.
    pub created: bool,
    /// Diagnostics written by the factory (or the dispatcher).
    pub log: ResultDescriptor,
}

/// Outcome of a full configuration pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupReport {
    /// Per-entry outcomes, in processing order.
    pub outcomes: Vec<EntryOutcome>,
    /// True if processing stopped early on a failed entry.
    pub aborted: bool,
}

impl SetupReport {
    /// Number of entries that produced a handle.
    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.created).count()
    }

    /// Number of entries that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.created_count()
    }
}

/// Drives factories from configuration entries.
pub struct HardwareDispatcher {
    registry: HardwareRegistry,
    table: HardwareTable,
}

impl HardwareDispatcher {
    /// Create a dispatcher from a populated registry.
    pub fn new(registry: HardwareRegistry, policy: DuplicatePolicy) -> Self {
        info!(
            target: HARDWARE_LOG_TARGET,
            "Dispatcher ready with {} hardware types, duplicate names: {:?}",
            registry.len(),
            policy
        );
        Self {
            registry,
            table: HardwareTable::with_policy(policy),
        }
    }

    /// Create a dispatcher using the `[dispatcher]` config section.
    pub fn from_config(registry: HardwareRegistry, config: &DispatcherConfig) -> Self {
        Self::new(registry, config.duplicate_names)
    }

    /// The registry this dispatcher resolves tags in.
    pub fn registry(&self) -> &HardwareRegistry {
        &self.registry
    }

    /// Resolve the entry's tag and run its factory.
    ///
    /// An unknown tag is reported in the outcome's log the same way a
    /// factory reports its own failures.
    pub fn create(&mut self, entry: &HardwareEntry) -> EntryOutcome {
        let mut log = ResultDescriptor::new();
        let created = match self.registry.resolve(&entry.tag) {
            Some(factory) => factory(&entry.setup, &mut log, &mut self.table),
            None => {
                let err = HardwareError::UnknownType(entry.tag.clone());
                error!(target: HARDWARE_LOG_TARGET, tag = %entry.tag, "{err}");
                log.set_fault(&err);
                false
            }
        };

        EntryOutcome {
            tag: entry.tag.clone(),
            name: entry.setup.name().map(str::to_string),
            created,
            log,
        }
    }

    /// Process `entries` in order.
    ///
    /// With `abort_on_fault` the pass stops after the first failed entry and
    /// the report is marked aborted. Entries created before the failure stay
    /// in the table.
    pub fn setup_all(&mut self, entries: &[HardwareEntry], abort_on_fault: bool) -> SetupReport {
        let mut report = SetupReport::default();

        for entry in entries {
            let outcome = self.create(entry);
            let failed = !outcome.created;
            report.outcomes.push(outcome);

            if failed && abort_on_fault {
                warn!(
                    target: HARDWARE_LOG_TARGET,
                    tag = %entry.tag,
                    "Aborting hardware setup after failed entry"
                );
                report.aborted = true;
                break;
            }
        }

        info!(
            target: HARDWARE_LOG_TARGET,
            "Hardware setup finished: {} created, {} failed",
            report.created_count(),
            report.failed_count()
        );
        report
    }

    /// The hardware mapping table.
    pub fn table(&self) -> &HardwareTable {
        &self.table
    }

    /// Mutable access to the hardware mapping table.
    pub fn table_mut(&mut self) -> &mut HardwareTable {
        &mut self.table
    }

    /// Consume the dispatcher and keep only the table.
    pub fn into_table(self) -> HardwareTable {
        self.table
    }
}
