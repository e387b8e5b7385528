//! Error types for settings access and loading.

use thiserror::Error;

/// Boxed error returned by change hooks and settings sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when reading, writing or loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The name is not declared by any setting in the schema.
	#[error("unknown setting: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownSetting {
		/// The unrecognized setting name.
		name: String,
		/// A declared name close enough to be a likely typo.
		suggestion: Option<String>,
	},

	/// The value was rejected by the setting's allowed values or validator.
	///
	/// The write did not commit.
	#[error("invalid value for setting '{setting}': {reason}")]
	InvalidValue {
		/// The setting name.
		setting: String,
		/// Human-readable reason for the rejection.
		reason: String,
	},

	/// A settings source could not be read or parsed.
	#[error("settings source {origin} is unavailable: {source}")]
	SourceUnavailable {
		/// Where the source was read from (usually a path).
		origin: String,
		/// The underlying read or parse error.
		#[source]
		source: BoxError,
	},

	/// A change hook failed after the new value was committed.
	#[error("change hook for setting '{setting}' failed: {source}")]
	HookFailure {
		/// The setting whose hook failed.
		setting: String,
		/// The error returned by the hook.
		#[source]
		source: BoxError,
	},

	/// A typed read found a value of a different type.
	#[error("type mismatch for setting '{setting}': expected {expected}, got {got}")]
	TypeMismatch {
		/// The setting name.
		setting: String,
		/// The type requested by the key.
		expected: &'static str,
		/// The type of the stored value.
		got: &'static str,
	},
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
