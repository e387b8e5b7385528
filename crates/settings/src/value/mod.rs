//! Dynamically typed setting values.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


/// The value of a setting.
///
/// Deserializes from any self-describing format, so a settings file parsed as
/// TOML or JSON maps directly onto these variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	/// Absent value, used to disable a feature.
	Null,
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
	/// Sequence of values.
	List(Vec<SettingValue>),
	/// Ordered mapping of values.
	Map(IndexMap<String, SettingValue>),
}

impl SettingValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			SettingValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value, widening integers.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			SettingValue::Float(v) => Some(*v),
			SettingValue::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			SettingValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the mapping if this is a `Map` variant.
	pub fn as_map(&self) -> Option<&IndexMap<String, SettingValue>> {
		match self {
			SettingValue::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Returns `true` for `Null` and the empty string.
	///
	/// Settings that switch a feature off by being left blank use this.
	pub fn is_blank(&self) -> bool {
		match self {
			SettingValue::Null => true,
			SettingValue::String(s) => s.is_empty(),
			_ => false,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Null => "null",
			SettingValue::Bool(_) => "bool",
			SettingValue::Int(_) => "int",
			SettingValue::Float(_) => "float",
			SettingValue::String(_) => "string",
			SettingValue::List(_) => "list",
			SettingValue::Map(_) => "map",
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SettingValue::Null => f.write_str("null"),
			SettingValue::Bool(v) => write!(f, "{v}"),
			SettingValue::Int(v) => write!(f, "{v}"),
			SettingValue::Float(v) => write!(f, "{v:?}"),
			SettingValue::String(v) => write!(f, "{v:?}"),
			SettingValue::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			SettingValue::Map(entries) => {
				f.write_str("{")?;
				for (i, (key, value)) in entries.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key:?}: {value}")?;
				}
				f.write_str("}")
			}
		}
	}
}

impl From<bool> for SettingValue {
	fn from(v: bool) -> Self {
		SettingValue::Bool(v)
	}
}

impl From<i64> for SettingValue {
	fn from(v: i64) -> Self {
		SettingValue::Int(v)
	}
}

impl From<i32> for SettingValue {
	fn from(v: i32) -> Self {
		SettingValue::Int(v.into())
	}
}

impl From<f64> for SettingValue {
	fn from(v: f64) -> Self {
		SettingValue::Float(v)
	}
}

impl From<String> for SettingValue {
	fn from(v: String) -> Self {
		SettingValue::String(v)
	}
}

impl From<&str> for SettingValue {
	fn from(v: &str) -> Self {
		SettingValue::String(v.to_string())
	}
}

impl<T: Into<SettingValue>> From<Vec<T>> for SettingValue {
	fn from(v: Vec<T>) -> Self {
		SettingValue::List(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<SettingValue>> From<Option<T>> for SettingValue {
	fn from(v: Option<T>) -> Self {
		v.map_or(SettingValue::Null, Into::into)
	}
}

impl From<IndexMap<String, SettingValue>> for SettingValue {
	fn from(v: IndexMap<String, SettingValue>) -> Self {
		SettingValue::Map(v)
	}
}

mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
	impl Sealed for Option<String> {}
	impl Sealed for super::SettingValue {}
}

/// Types that can be extracted from a [`SettingValue`] by typed keys.
pub trait FromSettingValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the type doesn't match.
	fn from_value(value: &SettingValue) -> Option<Self>;

	/// Name of the expected type, for mismatch errors.
	fn type_name() -> &'static str;
}

impl FromSettingValue for bool {
	fn from_value(value: &SettingValue) -> Option<Self> {
		value.as_bool()
	}

	fn type_name() -> &'static str {
		"bool"
	}
}

impl FromSettingValue for i64 {
	fn from_value(value: &SettingValue) -> Option<Self> {
		value.as_int()
	}

	fn type_name() -> &'static str {
		"int"
	}
}

impl FromSettingValue for f64 {
	fn from_value(value: &SettingValue) -> Option<Self> {
		value.as_float()
	}

	fn type_name() -> &'static str {
		"float"
	}
}

impl FromSettingValue for String {
	fn from_value(value: &SettingValue) -> Option<Self> {
		value.as_str().map(str::to_string)
	}

	fn type_name() -> &'static str {
		"string"
	}
}

/// Blank values (`Null` or `""`) read as `None`.
impl FromSettingValue for Option<String> {
	fn from_value(value: &SettingValue) -> Option<Self> {
		if value.is_blank() {
			return Some(None);
		}
		value.as_str().map(|s| Some(s.to_string()))
	}

	fn type_name() -> &'static str {
		"optional string"
	}
}

impl FromSettingValue for SettingValue {
	fn from_value(value: &SettingValue) -> Option<Self> {
		Some(value.clone())
	}

	fn type_name() -> &'static str {
		"any"
	}
}
