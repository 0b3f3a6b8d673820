//! Type registry for hardware factories.
//!
//! Provides a `HardwareRegistry` struct binding type tags (e.g. "onewire")
//! to factory functions. The registry is constructed at startup, populated
//! by the per-driver registration functions and then handed to the
//! dispatcher by value. No global state, so independent registries can be
//! built side by side in tests.

use hwio_common::consts::HARDWARE_LOG_TARGET;
use hwio_common::hardware::HardwareFactory;
use static_assertions::assert_impl_all;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Registry of available hardware types.
pub struct HardwareRegistry {
    factories: HashMap<String, HardwareFactory>,
}

assert_impl_all!(HardwareRegistry: Send, Sync);

impl HardwareRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Bind `tag` to `factory`.
    ///
    /// A second registration under the same tag replaces the first. An empty
    /// tag is ignored.
    pub fn register(&mut self, tag: &str, factory: HardwareFactory) {
        if tag.is_empty() {
            warn!(target: HARDWARE_LOG_TARGET, "Ignoring hardware registration with empty tag");
            return;
        }
        if self.factories.insert(tag.to_string(), factory).is_some() {
            debug!(target: HARDWARE_LOG_TARGET, tag, "Rebound hardware type");
        }
    }

    /// Get the factory bound to `tag`.
    pub fn resolve(&self, tag: &str) -> Option<HardwareFactory> {
        self.factories.get(tag).copied()
    }

    /// True if a factory is bound to `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// List all registered tags, sorted.
    pub fn list_types(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for HardwareRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwio_common::prelude::*;
    use std::any::Any;

    struct Marker(&'static str);

    impl HardwareInterface for Marker {
        fn kind(&self) -> &'static str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn insert_marker(
        setup: &SetupDescriptor,
        label: &'static str,
        table: &mut HardwareTable,
    ) -> bool {
        match setup.name() {
            Some(name) => table.insert(name, HardwareHandle::new(Marker(label))).is_ok(),
            None => false,
        }
    }

    fn create_alpha(
        setup: &SetupDescriptor,
        _: &mut ResultDescriptor,
        table: &mut HardwareTable,
    ) -> bool {
        insert_marker(setup, "Alpha", table)
    }

    fn create_beta(
        setup: &SetupDescriptor,
        _: &mut ResultDescriptor,
        table: &mut HardwareTable,
    ) -> bool {
        insert_marker(setup, "Beta", table)
    }

    fn invoke(factory: HardwareFactory, name: &str, table: &mut HardwareTable) -> bool {
        let setup = SetupDescriptor::new().with("name", name);
        factory(&setup, &mut ResultDescriptor::new(), table)
    }

    #[test]
    fn registry_distinct_tags_no_cross_talk() {
        let mut reg = HardwareRegistry::new();
        reg.register("alpha", create_alpha);
        reg.register("beta", create_beta);

        let mut table = HardwareTable::new();
        assert!(invoke(reg.resolve("alpha").unwrap(), "a", &mut table));
        assert!(invoke(reg.resolve("beta").unwrap(), "b", &mut table));

        assert_eq!(table.get("a").unwrap().kind(), "Alpha");
        assert_eq!(table.get("b").unwrap().kind(), "Beta");
    }

    #[test]
    fn registry_last_registration_wins() {
        let mut reg = HardwareRegistry::new();
        reg.register("dup", create_alpha);
        reg.register("dup", create_beta);
        assert_eq!(reg.len(), 1);

        let mut table = HardwareTable::new();
        assert!(invoke(reg.resolve("dup").unwrap(), "x", &mut table));
        assert_eq!(table.get("x").unwrap().kind(), "Beta");
    }

    #[test]
    fn registry_unknown_tag_resolves_to_none() {
        let reg = HardwareRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.resolve("nonexistent").is_none());
        assert!(!reg.contains("nonexistent"));
    }

    #[test]
    fn registry_tags_are_case_sensitive() {
        let mut reg = HardwareRegistry::new();
        reg.register("onewire", create_alpha);
        assert!(reg.resolve("OneWire").is_none());
        assert!(reg.contains("onewire"));
    }

    #[test]
    fn registry_ignores_empty_tag() {
        let mut reg = HardwareRegistry::new();
        reg.register("", create_alpha);
        assert!(reg.is_empty());
    }

    #[test]
    fn registry_list_types_sorted() {
        let mut reg = HardwareRegistry::default();
        reg.register("beta", create_beta);
        reg.register("alpha", create_alpha);
        assert_eq!(reg.list_types(), vec!["alpha", "beta"]);
    }
}
