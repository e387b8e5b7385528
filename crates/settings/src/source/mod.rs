//! External sources of setting values.
//!
//! A source only has to produce a flat mapping from setting name to
//! [`SettingValue`]; validation happens when the mapping is loaded into a
//! registry.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{BoxError, Result, SettingsError};
use crate::value::SettingValue;

#[cfg(test)]
mod tests;

/// Producer of a whole settings mapping.
pub trait SettingsSource {
	/// Describes where the values come from, for logs and errors.
	fn origin(&self) -> String;

	/// Reads the mapping, in the order the source defines it.
	fn read(&self) -> Result<IndexMap<String, SettingValue>>;
}

/// Serialization formats understood by [`FileSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
	Toml,
	Json,
}

impl FileFormat {
	/// Picks a format from the file extension. Anything but `.json` is TOML.
	pub fn from_path(path: &Path) -> Self {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
			_ => FileFormat::Toml,
		}
	}

	/// Parses a document into a settings mapping.
	pub fn parse(self, text: &str) -> std::result::Result<IndexMap<String, SettingValue>, BoxError> {
		Ok(match self {
			FileFormat::Toml => toml::from_str(text)?,
			FileFormat::Json => serde_json::from_str(text)?,
		})
	}
}

/// Settings file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
	format: FileFormat,
}

impl FileSource {
	/// Creates a source whose format follows the file extension.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let format = FileFormat::from_path(&path);
		Self { path, format }
	}

	pub fn with_format(mut self, format: FileFormat) -> Self {
		self.format = format;
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn unavailable(&self, source: BoxError) -> SettingsError {
		SettingsError::SourceUnavailable {
			origin: self.origin(),
			source,
		}
	}
}

impl SettingsSource for FileSource {
	fn origin(&self) -> String {
		self.path.display().to_string()
	}

	fn read(&self) -> Result<IndexMap<String, SettingValue>> {
		let text = std::fs::read_to_string(&self.path).map_err(|err| self.unavailable(err.into()))?;
		self.format.parse(&text).map_err(|err| self.unavailable(err))
	}
}

/// In-memory mapping, for values assembled by the host program.
#[derive(Debug, Clone, Default)]
pub struct MappingSource {
	values: IndexMap<String, SettingValue>,
}

impl MappingSource {
	pub fn new(values: IndexMap<String, SettingValue>) -> Self {
		Self { values }
	}
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for MappingSource {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

impl SettingsSource for MappingSource {
	fn origin(&self) -> String {
		"in-memory mapping".to_string()
	}

	fn read(&self) -> Result<IndexMap<String, SettingValue>> {
		Ok(self.values.clone())
	}
}
