//! Scoped overrides.
//!
//! An [`Override`] names a set of temporary values. Activating it against a
//! registry captures a [`Snapshot`], applies the values, and hands back an
//! [`OverrideGuard`]. When the guard is released or dropped the whole
//! snapshot is written back, so the registry returns to its exact
//! pre-activation state however the scope ends: normal completion, early
//! return, `?`, or a panic unwinding through it.
//!
//! ```ignore
//! let overrides = Override::new().with("PRECISION", 100);
//!
//! // Block shape.
//! {
//!     let guard = overrides.enter(&mut settings)?;
//!     assert_eq!(guard.get("PRECISION")?, &SettingValue::Int(100));
//! }
//!
//! // Callable shape.
//! let mut run = overrides.wrap(|settings: &mut Settings| compute(settings));
//! run(&mut settings)?;
//! ```
//!
//! Every activation takes its own snapshot, so nested overrides unwind in
//! order. A single guard cannot be activated twice.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use tracing::{debug, error, warn};

use crate::error::{Result, SettingsError};
use crate::registry::Settings;
use crate::snapshot::Snapshot;
use crate::value::SettingValue;


/// Set of temporary values to apply within a scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Override {
	values: IndexMap<String, SettingValue>,
}

impl Override {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one override. Later values for the same name replace earlier ones.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	pub fn values(&self) -> &IndexMap<String, SettingValue> {
		&self.values
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Applies the overrides to `settings` after capturing a snapshot.
	///
	/// If any override is rejected, the snapshot is restored before the
	/// error is returned, so a failed activation leaves no partial state.
	pub fn enter<'a>(&self, settings: &'a mut Settings) -> Result<OverrideGuard<'a>> {
		let snapshot = self.apply(settings)?;
		Ok(OverrideGuard {
			settings,
			snapshot: Some(snapshot),
		})
	}

	/// Runs `f` with the overrides active and restores afterwards.
	///
	/// An error from `f` is returned unchanged once the registry has been
	/// restored. A restore failure is only returned when `f` succeeded.
	pub fn scope<T, E, F>(&self, settings: &mut Settings, f: F) -> std::result::Result<T, E>
	where
		F: FnOnce(&mut Settings) -> std::result::Result<T, E>,
		E: From<SettingsError>,
	{
		let mut guard = self.enter(settings)?;
		let result = f(&mut *guard);
		finish(guard.release(), result)
	}

	/// Wraps `f` so that every call runs inside its own override scope.
	///
	/// Arguments beyond the registry are captured by the closure.
	pub fn wrap<T, E, F>(self, mut f: F) -> impl FnMut(&mut Settings) -> std::result::Result<T, E>
	where
		F: FnMut(&mut Settings) -> std::result::Result<T, E>,
		E: From<SettingsError>,
	{
		move |settings: &mut Settings| self.scope(settings, &mut f)
	}

	/// Captures a snapshot and applies the overrides, undoing a partial apply.
	pub(crate) fn apply(&self, settings: &mut Settings) -> Result<Snapshot> {
		let snapshot = settings.snapshot();
		debug!(count = self.values.len(), "entering settings override");

		let applied = settings.load_mapping(self.values.iter().map(|(name, value)| (name, value.clone())));
		if let Err(err) = applied {
			if let Err(restore_err) = settings.restore(&snapshot) {
				warn!(error = %restore_err, "failed to undo partially applied override");
			}
			return Err(err);
		}

		Ok(snapshot)
	}
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for Override {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

/// Combines the body's result with the restore result.
pub(crate) fn finish<T, E>(restored: Result<()>, result: std::result::Result<T, E>) -> std::result::Result<T, E>
where
	E: From<SettingsError>,
{
	match restored {
		Ok(()) => result,
		Err(err) if result.is_ok() => Err(err.into()),
		Err(err) => {
			warn!(error = %err, "settings restore failed while propagating an error");
			result
		}
	}
}

/// Active override over a borrowed registry.
///
/// Dereferences to the registry, so reads and writes inside the scope go
/// through the guard.
#[must_use = "dropping the guard immediately restores the previous settings"]
#[derive(Debug)]
pub struct OverrideGuard<'a> {
	settings: &'a mut Settings,
	snapshot: Option<Snapshot>,
}

impl OverrideGuard<'_> {
	/// Restores the captured snapshot and reports the outcome.
	pub fn release(mut self) -> Result<()> {
		self.restore()
	}

	/// The state that will be restored.
	pub fn restore_point(&self) -> Option<&Snapshot> {
		self.snapshot.as_ref()
	}

	fn restore(&mut self) -> Result<()> {
		let Some(snapshot) = self.snapshot.take() else {
			return Ok(());
		};
		debug!("leaving settings override");
		self.settings.restore(&snapshot)
	}
}

impl Deref for OverrideGuard<'_> {
	type Target = Settings;

	fn deref(&self) -> &Settings {
		&*self.settings
	}
}

impl DerefMut for OverrideGuard<'_> {
	fn deref_mut(&mut self) -> &mut Settings {
		&mut *self.settings
	}
}

impl Drop for OverrideGuard<'_> {
	fn drop(&mut self) {
		if let Err(err) = self.restore() {
			error!(error = %err, "failed to restore settings after override");
		}
	}
}
