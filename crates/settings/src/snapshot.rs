//! Point-in-time copies of a registry's values.

use indexmap::IndexMap;

use crate::value::SettingValue;

/// Owned copy of every current value, in declaration order.
///
/// A snapshot shares nothing with the registry it came from. It is only
/// restore material: capture does not validate it, restoring does, because
/// restoring goes through the normal write path.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
	values: IndexMap<String, SettingValue>,
}

impl Snapshot {
	pub(crate) fn new(values: IndexMap<String, SettingValue>) -> Self {
		Self { values }
	}

	pub fn get(&self, name: &str) -> Option<&SettingValue> {
		self.values.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
		self.values.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn into_inner(self) -> IndexMap<String, SettingValue> {
		self.values
	}
}
