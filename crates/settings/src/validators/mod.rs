//! Standard validators for setting values.
//!
//! These functions can be used with [`Setting::validator`](crate::Setting::validator).

use crate::value::SettingValue;


/// Validates that an integer lies within `MIN..=MAX`.
pub fn int_range<const MIN: i64, const MAX: i64>(value: &SettingValue) -> Result<(), String> {
	match value {
		SettingValue::Int(n) if (MIN..=MAX).contains(n) => Ok(()),
		SettingValue::Int(n) => Err(format!("must be between {MIN} and {MAX}, got {n}")),
		other => Err(format!("expected integer, got {}", other.type_name())),
	}
}

/// Validates that a value is a mapping.
pub fn map(value: &SettingValue) -> Result<(), String> {
	match value {
		SettingValue::Map(_) => Ok(()),
		other => Err(format!("expected map, got {}", other.type_name())),
	}
}
