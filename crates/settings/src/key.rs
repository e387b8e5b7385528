use std::marker::PhantomData;

use crate::value::FromSettingValue;

/// Typed handle to a setting name.
///
/// ```ignore
/// pub const PRECISION: SettingKey<i64> = SettingKey::new("PRECISION");
///
/// let precision = settings.value(PRECISION)?;
/// ```
pub struct SettingKey<T: FromSettingValue> {
	name: &'static str,
	_marker: PhantomData<fn() -> T>,
}

impl<T: FromSettingValue> Clone for SettingKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: FromSettingValue> Copy for SettingKey<T> {}

impl<T: FromSettingValue> SettingKey<T> {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			_marker: PhantomData,
		}
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl<T: FromSettingValue> std::fmt::Debug for SettingKey<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("SettingKey").field(&self.name).finish()
	}
}
