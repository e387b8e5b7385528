//! Setting descriptors.
//!
//! A [`Setting`] describes the shape of one field: its default, the values it
//! accepts, the hook that runs when it changes and its documentation. It
//! never stores a current value; values live in [`Settings`] instances.
//!
//! The name a descriptor governs is bound late, when it is placed into a
//! [`Schema`](crate::Schema), so one declaration can be written before it
//! knows which field it represents.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{BoxError, Result, SettingsError};
use crate::registry::Settings;
use crate::value::SettingValue;


/// Extra predicate on a value, run after the allowed-values check.
pub type SettingValidator = fn(&SettingValue) -> std::result::Result<(), String>;

/// Side effect run after a new value has been committed.
///
/// The hook observes the registry with the new value already in place.
pub type ChangeHook = fn(&Settings) -> std::result::Result<(), BoxError>;

/// Declaration of one configurable setting.
pub struct Setting {
	default: SettingValue,
	values: Option<Vec<SettingValue>>,
	validator: Option<SettingValidator>,
	on_change: Option<ChangeHook>,
	description: &'static str,
	name: OnceLock<String>,
}

impl Setting {
	/// Declares a setting with the given default and no constraints.
	pub fn new(default: impl Into<SettingValue>) -> Self {
		Self {
			default: default.into(),
			values: None,
			validator: None,
			on_change: None,
			description: "",
			name: OnceLock::new(),
		}
	}

	/// Restricts the setting to the given values.
	pub fn values<I, V>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<SettingValue>,
	{
		self.values = Some(values.into_iter().map(Into::into).collect());
		self
	}

	/// Adds a value predicate.
	pub fn validator(mut self, validator: SettingValidator) -> Self {
		self.validator = Some(validator);
		self
	}

	/// Sets the hook run after every committed write.
	pub fn on_change(mut self, hook: ChangeHook) -> Self {
		self.on_change = Some(hook);
		self
	}

	/// Sets the documentation text.
	pub fn description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	pub fn default_value(&self) -> &SettingValue {
		&self.default
	}

	pub fn allowed_values(&self) -> Option<&[SettingValue]> {
		self.values.as_deref()
	}

	pub fn hook(&self) -> Option<ChangeHook> {
		self.on_change
	}

	/// Returns the bound name, or `None` before the setting joins a schema.
	pub fn name(&self) -> Option<&str> {
		self.name.get().map(String::as_str)
	}

	/// Binds the name this descriptor governs.
	///
	/// # Panics
	///
	/// Panics if a name is already bound. A descriptor belongs to exactly one
	/// field of one schema.
	pub fn bind_name(&self, name: &str) {
		if let Err(rejected) = self.name.set(name.to_string()) {
			panic!(
				"setting '{}' cannot be rebound as '{rejected}'",
				self.name().unwrap_or_default()
			);
		}
	}

	/// Checks `value` against the allowed values and validator.
	pub fn validate(&self, name: &str, value: &SettingValue) -> Result<()> {
		if let Some(values) = &self.values
			&& !values.contains(value)
		{
			return Err(SettingsError::InvalidValue {
				setting: name.to_string(),
				reason: format!("{value} is not one of {}", SettingValue::List(values.clone())),
			});
		}

		if let Some(validator) = self.validator {
			validator(value).map_err(|reason| SettingsError::InvalidValue {
				setting: name.to_string(),
				reason,
			})?;
		}

		Ok(())
	}

	/// Returns the documentation for help output.
	pub fn describe(&self) -> Documentation {
		Documentation {
			default: self.default.clone(),
			values: self.values.clone(),
			description: self.description,
		}
	}
}

impl fmt::Debug for Setting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Setting")
			.field("name", &self.name())
			.field("default", &self.default)
			.field("values", &self.values)
			.field("has_validator", &self.validator.is_some())
			.field("has_hook", &self.on_change.is_some())
			.finish()
	}
}

/// Introspection data for one setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Documentation {
	pub default: SettingValue,
	pub values: Option<Vec<SettingValue>>,
	pub description: &'static str,
}

impl fmt::Display for Documentation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "default={}", self.default)?;
		if let Some(values) = &self.values {
			write!(f, "\nvalues={}", SettingValue::List(values.clone()))?;
		}
		let description = self.description.trim();
		if !description.is_empty() {
			write!(f, "\n{description}")?;
		}
		Ok(())
	}
}
