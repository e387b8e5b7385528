//! Built-in settings of phiconf.
//!
//! This crate owns the concrete option table ([`SCHEMA`]), typed handles for
//! each option ([`keys`]), the logging change hook, and the process-wide
//! registry returned by [`config`].
//!
//! Nothing is read from disk and no subscriber is installed until the host
//! calls [`initialize`]:
//!
//! ```ignore
//! phiconf_config::initialize()?;
//!
//! let precision = phiconf_config::config().value(keys::PRECISION)?;
//! let overrides = Override::new().with("PARTITION_TYPE", "TRI");
//! phiconf_config::config().scoped(&overrides, || compute())?;
//! ```

use std::sync::LazyLock;

mod bootstrap;
mod error;
pub mod keys;
pub mod logging;
mod options;

pub use bootstrap::{Bootstrap, CONFIG_FILENAME, bootstrap_from, initialize};
pub use error::{ConfigError, LoggingError, Result};
pub use logging::configure_logging;
pub use options::SCHEMA;
pub use phiconf_settings::{
	Override, OverrideGuard, SettingKey, SettingValue, Settings, SettingsError, SharedOverrideGuard, SharedSettings,
	Snapshot,
};

static CONFIG: LazyLock<SharedSettings> = LazyLock::new(|| SharedSettings::new(new_settings()));

/// The process-wide registry, at its defaults until [`initialize`] runs.
pub fn config() -> &'static SharedSettings {
	&CONFIG
}

/// A fresh registry over [`SCHEMA`], independent of [`config`].
pub fn new_settings() -> Settings {
	Settings::new(SCHEMA.clone())
}
