//! Error types for bootstrap and logging configuration.

use std::path::PathBuf;

use phiconf_settings::SettingsError;
use thiserror::Error;

/// Errors raised while routing log output.
#[derive(Debug, Error)]
pub enum LoggingError {
	/// A level setting holds a name that maps to no log level.
	#[error("unknown log level: {0} (expected DEBUG, INFO, WARNING, ERROR or CRITICAL)")]
	UnknownLevel(String),

	/// The log file could not be opened for appending.
	#[error("I/O error opening log file {path}: {error}")]
	OpenLogFile {
		/// Path to the log file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The installed subscriber rejected the new sinks.
	#[error("failed to reload log sinks: {0}")]
	Reload(#[from] tracing_subscriber::reload::Error),

	/// A logging setting could not be read.
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// Errors that can occur during bootstrap.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Loading or reading settings failed.
	#[error(transparent)]
	Settings(#[from] SettingsError),

	/// Log routing could not be configured.
	#[error(transparent)]
	Logging(#[from] LoggingError),
}

/// Result type for bootstrap operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
