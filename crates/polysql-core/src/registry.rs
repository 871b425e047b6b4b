//! Driver registry mapping engine names to driver descriptors

use crate::Driver;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Registry of driver descriptors keyed by engine name.
///
/// Populated once at startup and read-only afterwards in normal operation.
/// Registration after startup is still allowed; the inner lock serializes it
/// against concurrent lookups.
pub struct DriverRegistry {
    drivers: RwLock<HashMap<String, Arc<Driver>>>,
}

impl DriverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a descriptor under `name`.
    ///
    /// An existing entry for the same name is replaced wholesale, never
    /// merged field by field: the last registration wins. This is intended,
    /// so a host can swap in its own descriptor for a built-in engine.
    pub fn register(&self, name: impl Into<String>, driver: Driver) {
        let name = name.into();
        let capabilities = driver.capabilities();
        let previous = self.drivers.write().insert(name.clone(), Arc::new(driver));
        if previous.is_some() {
            tracing::warn!(driver = %name, "replacing previously registered database driver");
        }
        tracing::info!(driver = %name, ?capabilities, "registering database driver");
    }

    /// Look up the descriptor registered under `name`.
    ///
    /// `None` means callers should use entirely generic behaviour; it is not
    /// an error and leaves the registry untouched.
    pub fn lookup(&self, name: &str) -> Option<Arc<Driver>> {
        let driver = self.drivers.read().get(name).cloned();
        if driver.is_none() {
            tracing::debug!(driver = %name, "driver not found in registry, using generic behaviour");
        }
        driver
    }

    /// Check if a driver is registered
    pub fn has(&self, name: &str) -> bool {
        self.drivers.read().contains_key(name)
    }

    /// List all registered driver names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.drivers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.drivers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.read().is_empty()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry used by the CLI
static DRIVER_REGISTRY: LazyLock<DriverRegistry> = LazyLock::new(DriverRegistry::new);

/// The process-wide driver registry.
pub fn registry() -> &'static DriverRegistry {
    &DRIVER_REGISTRY
}

/// Register a descriptor in the process-wide registry.
pub fn register(name: impl Into<String>, driver: Driver) {
    registry().register(name, driver);
}

/// Look up a descriptor in the process-wide registry.
pub fn lookup(name: &str) -> Option<Arc<Driver>> {
    registry().lookup(name)
}
