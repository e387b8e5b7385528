//! Live settings registry.
//!
//! [`Settings`] holds the current value of every setting declared by its
//! [`Schema`]. All writes, whether direct, bulk or from an override, go
//! through [`Settings::set`], which runs in a fixed order:
//!
//! 1. reject names the schema does not declare
//! 2. validate the value against the descriptor
//! 3. commit the value
//! 4. run the descriptor's change hook, which sees the committed value
//!
//! A rejected write never touches the stored values.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{Result, SettingsError};
use crate::key::SettingKey;
use crate::schema::Schema;
use crate::snapshot::Snapshot;
use crate::source::SettingsSource;
use crate::value::{FromSettingValue, SettingValue};

#[cfg(test)]
mod tests;

/// Current values for every setting of a schema.
#[derive(Debug, Clone)]
pub struct Settings {
	schema: Arc<Schema>,
	values: IndexMap<String, SettingValue>,
}

impl Settings {
	/// Creates a registry with every setting at its default.
	pub fn new(schema: Arc<Schema>) -> Self {
		let values = schema.defaults();
		Self { schema, values }
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	/// Returns the defaults of the schema, independent of current values.
	pub fn defaults(&self) -> IndexMap<String, SettingValue> {
		self.schema.defaults()
	}

	/// Returns the current value of `name`.
	pub fn get(&self, name: &str) -> Result<&SettingValue> {
		self.values.get(name).ok_or_else(|| self.unknown(name))
	}

	/// Returns the current value of a typed key.
	pub fn value<T: FromSettingValue>(&self, key: SettingKey<T>) -> Result<T> {
		let value = self.get(key.name())?;
		T::from_value(value).ok_or_else(|| SettingsError::TypeMismatch {
			setting: key.name().to_string(),
			expected: T::type_name(),
			got: value.type_name(),
		})
	}

	/// Validates and commits a value, then runs the change hook.
	///
	/// A hook failure is reported after the value has been committed.
	pub fn set(&mut self, name: &str, value: impl Into<SettingValue>) -> Result<()> {
		let schema = Arc::clone(&self.schema);
		let setting = schema.get(name).ok_or_else(|| self.unknown(name))?;
		let value = value.into();

		setting.validate(name, &value)?;

		trace!(setting = name, value = %value, "setting committed");
		self.values.insert(name.to_string(), value);

		if let Some(hook) = setting.hook() {
			trace!(setting = name, "running change hook");
			hook(self).map_err(|source| SettingsError::HookFailure {
				setting: name.to_string(),
				source,
			})?;
		}

		Ok(())
	}

	/// Applies [`set`](Self::set) to every entry, in iteration order.
	///
	/// Stops at the first failure. Entries before it stay applied; entries
	/// after it are not attempted.
	pub fn load_mapping<I, K, V>(&mut self, mapping: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<SettingValue>,
	{
		for (name, value) in mapping {
			self.set(name.as_ref(), value)?;
		}
		Ok(())
	}

	/// Reads a whole mapping from `source` and loads it.
	pub fn load_from_source<S: SettingsSource + ?Sized>(&mut self, source: &S) -> Result<()> {
		let mapping = source.read()?;
		debug!(origin = %source.origin(), count = mapping.len(), "loading settings");
		self.load_mapping(mapping)
	}

	/// Copies every current value.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot::new(self.values.clone())
	}

	/// Writes every value of `snapshot` back through the normal write path.
	///
	/// Unlike [`load_mapping`](Self::load_mapping), a failing key does not
	/// stop the restore: every key is written, and the first error is returned
	/// afterwards. A hook failure leaves its value committed, so the stored
	/// values always end up equal to the snapshot.
	pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
		let mut first_error = None;
		for (name, value) in snapshot.iter() {
			if let Err(err) = self.set(name, value.clone()) {
				debug!(setting = name, error = %err, "restore continues past failed write");
				first_error.get_or_insert(err);
			}
		}
		first_error.map_or(Ok(()), Err)
	}

	/// Iterates current values in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
		self.values.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Human-readable dump of all values, one `NAME: value` line per
	/// setting, sorted by name.
	pub fn render(&self) -> String {
		self.to_string()
	}

	fn unknown(&self, name: &str) -> SettingsError {
		SettingsError::UnknownSetting {
			name: name.to_string(),
			suggestion: self.schema.suggest(name),
		}
	}
}

impl fmt::Display for Settings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut entries: Vec<_> = self.values.iter().collect();
		entries.sort_by(|a, b| a.0.cmp(b.0));

		for (i, (name, value)) in entries.into_iter().enumerate() {
			if i > 0 {
				f.write_str("\n")?;
			}
			write!(f, "{name}: {value}")?;
		}
		Ok(())
	}
}
