//! Hardware capability trait and the owning, type-erased handle.
//!
//! Every driver type the registry can create implements
//! [`HardwareInterface`]. The mapping table stores drivers as
//! [`HardwareHandle`]s; lookup code recovers the concrete driver with a
//! checked downcast instead of an unchecked cast.

use std::any::Any;
use std::fmt;

use static_assertions::assert_impl_all;

/// Trait implemented by every hardware driver stored in a `HardwareTable`.
///
/// # Example
///
/// ```rust
/// use hwio_common::hardware::{HardwareHandle, HardwareInterface};
/// use std::any::Any;
///
/// struct Relay;
///
/// impl HardwareInterface for Relay {
///     fn kind(&self) -> &'static str { "Relay" }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
///
/// let handle = HardwareHandle::new(Relay);
/// assert!(handle.downcast_ref::<Relay>().is_some());
/// ```
pub trait HardwareInterface: Any + Send + Sync {
    /// Driver kind label used in diagnostics (e.g. "OneWire", "PwmOutput").
    fn kind(&self) -> &'static str;

    /// Upcast for checked downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for checked downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Driver-specific diagnostics (JSON string).
    /// Default: None
    fn diagnostics(&self) -> Option<String> {
        None
    }
}

/// Owning reference to one instantiated driver.
pub struct HardwareHandle {
    inner: Box<dyn HardwareInterface>,
}

assert_impl_all!(HardwareHandle: Send, Sync);

impl HardwareHandle {
    /// Wrap a concrete driver.
    pub fn new<T: HardwareInterface>(driver: T) -> Self {
        Self {
            inner: Box::new(driver),
        }
    }

    /// Wrap an already boxed driver.
    pub fn from_boxed(inner: Box<dyn HardwareInterface>) -> Self {
        Self { inner }
    }

    /// Kind label of the wrapped driver.
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    /// True if the wrapped driver is a `T`.
    pub fn is<T: HardwareInterface>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Borrow the driver as `T`, or `None` if it is another type.
    pub fn downcast_ref<T: HardwareInterface>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the driver as `T`, or `None` if it is another type.
    pub fn downcast_mut<T: HardwareInterface>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut::<T>()
    }

    /// Driver diagnostics, if the driver provides any.
    pub fn diagnostics(&self) -> Option<String> {
        self.inner.diagnostics()
    }

    /// Give up the handle and return the boxed driver.
    pub fn into_inner(self) -> Box<dyn HardwareInterface> {
        self.inner
    }
}

impl fmt::Debug for HardwareHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HardwareHandle")
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Led {
        lit: bool,
    }

    impl HardwareInterface for Led {
        fn kind(&self) -> &'static str {
            "Led"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn diagnostics(&self) -> Option<String> {
            Some(format!(r#"{{"lit":{}}}"#, self.lit))
        }
    }

    struct Buzzer;

    impl HardwareInterface for Buzzer {
        fn kind(&self) -> &'static str {
            "Buzzer"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn downcast_to_stored_type() {
        let mut handle = HardwareHandle::new(Led { lit: false });
        assert_eq!(handle.kind(), "Led");
        assert!(handle.is::<Led>());

        handle.downcast_mut::<Led>().unwrap().lit = true;
        assert!(handle.downcast_ref::<Led>().unwrap().lit);
        assert_eq!(handle.diagnostics().as_deref(), Some(r#"{"lit":true}"#));
    }

    #[test]
    fn downcast_to_other_type_is_none() {
        let mut handle = HardwareHandle::new(Buzzer);
        assert!(!handle.is::<Led>());
        assert!(handle.downcast_ref::<Led>().is_none());
        assert!(handle.downcast_mut::<Led>().is_none());
        assert!(handle.diagnostics().is_none());
    }

    #[test]
    fn debug_shows_kind() {
        let handle = HardwareHandle::from_boxed(Box::new(Buzzer));
        assert_eq!(format!("{handle:?}"), r#"HardwareHandle { kind: "Buzzer" }"#);
        assert_eq!(handle.into_inner().kind(), "Buzzer");
    }
}
