//! Startup registration of the compiled-in drivers

use crate::DriversConfig;
use polysql_core::{Driver, DriverRegistry};
use std::sync::OnceLock;

/// Tracks whether the process-wide registry has been populated
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Every driver compiled into this build, as `(name, descriptor)` pairs
pub fn builtin_drivers() -> Vec<(&'static str, Driver)> {
    #[allow(unused_mut)]
    let mut drivers = Vec::new();

    #[cfg(feature = "oracle")]
    drivers.push((crate::oracle::NAME, crate::oracle::driver()));
    #[cfg(feature = "postgres")]
    drivers.push((crate::postgres::NAME, crate::postgres::driver()));
    #[cfg(feature = "mysql")]
    drivers.push((crate::mysql::NAME, crate::mysql::driver()));
    #[cfg(feature = "sqlite")]
    drivers.push((crate::sqlite::NAME, crate::sqlite::driver()));
    #[cfg(feature = "mssql")]
    drivers.push((crate::mssql::NAME, crate::mssql::driver()));

    drivers
}

/// Register every compiled-in driver that `config` leaves enabled.
///
/// Returns the number of drivers registered.
pub fn register_all(registry: &DriverRegistry, config: &DriversConfig) -> usize {
    let drivers = builtin_drivers();

    for name in &config.disabled {
        if !drivers.iter().any(|(builtin, _)| builtin == name) {
            tracing::warn!(driver = %name, "disabled driver is not compiled in, ignoring");
        }
    }

    let mut registered = 0;
    for (name, driver) in drivers {
        if !config.is_enabled(name) {
            tracing::info!(driver = name, "driver disabled by configuration");
            continue;
        }
        registry.register(name, driver);
        registered += 1;
    }
    registered
}

/// Create a standalone registry with all compiled-in drivers registered
pub fn registry_with_defaults() -> DriverRegistry {
    let registry = DriverRegistry::new();
    register_all(&registry, &DriversConfig::default());
    registry
}

/// Populate the process-wide registry from the configuration file.
///
/// Call once at startup, before any connection is opened. Later calls are
/// no-ops.
pub fn init() -> anyhow::Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }
    let config = DriversConfig::load()?;
    init_with(&config);
    Ok(())
}

/// Populate the process-wide registry using `config`. Only the first call
/// across `init` and `init_with` has any effect.
pub fn init_with(config: &DriversConfig) {
    INITIALIZED.get_or_init(|| {
        let count = register_all(polysql_core::registry(), config);
        tracing::info!(count, "database drivers registered");
    });
}

/// Whether the process-wide registry has been populated
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
