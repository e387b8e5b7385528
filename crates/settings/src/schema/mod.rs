//! Schema: the shared table of setting descriptors.
//!
//! A [`Schema`] plays the role of a registry *type*. It is built once, binds
//! every descriptor to its name, and is then shared read-only by all
//! [`Settings`](crate::Settings) instances created from it.

use indexmap::IndexMap;

use crate::setting::{Documentation, Setting};
use crate::value::SettingValue;

#[cfg(test)]
mod tests;

/// Ordered table of setting descriptors keyed by name.
#[derive(Debug)]
pub struct Schema {
	settings: IndexMap<String, Setting>,
}

impl Schema {
	/// Builds a schema, binding each descriptor to its name.
	///
	/// # Panics
	///
	/// Panics on a duplicate name, or if a descriptor was already bound by
	/// another schema.
	pub fn new<I, N>(settings: I) -> Self
	where
		I: IntoIterator<Item = (N, Setting)>,
		N: Into<String>,
	{
		let mut table = IndexMap::new();
		for (name, setting) in settings {
			let name = name.into();
			setting.bind_name(&name);
			if table.contains_key(&name) {
				panic!("setting '{name}' is declared twice");
			}
			table.insert(name, setting);
		}
		Self { settings: table }
	}

	pub fn get(&self, name: &str) -> Option<&Setting> {
		self.settings.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.settings.contains_key(name)
	}

	/// Iterates descriptors in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
		self.settings.iter().map(|(name, setting)| (name.as_str(), setting))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.settings.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.is_empty()
	}

	/// Returns every declared name mapped to its default.
	pub fn defaults(&self) -> IndexMap<String, SettingValue> {
		self.settings
			.iter()
			.map(|(name, setting)| (name.clone(), setting.default_value().clone()))
			.collect()
	}

	/// Returns the documentation of one setting.
	pub fn describe(&self, name: &str) -> Option<Documentation> {
		self.get(name).map(Setting::describe)
	}

	/// Suggests a declared name close to `name`.
	pub fn suggest(&self, name: &str) -> Option<String> {
		let needle = name.to_lowercase();
		self.names()
			.map(|candidate| (strsim::levenshtein(&needle, &candidate.to_lowercase()), candidate))
			.filter(|(distance, _)| *distance <= 3)
			.min_by_key(|(distance, _)| *distance)
			.map(|(_, candidate)| candidate.to_string())
	}
}
