//! Process-wide settings handle.
//!
//! [`SharedSettings`] wraps one [`Settings`] in a re-entrant mutex. Every
//! operation takes the lock, so writes (validate, commit, hook) never
//! interleave across threads. An override scope keeps the lock from
//! activation to restore: other threads wait for the whole scope, while the
//! owning thread keeps calling `get`/`set` inside it.
//!
//! Change hooks run while the lock is held and receive the registry
//! directly. They must not call back into the `SharedSettings` handle.

use std::cell::RefCell;

use indexmap::IndexMap;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use tracing::{debug, error};

use crate::error::{Result, SettingsError};
use crate::key::SettingKey;
use crate::registry::Settings;
use crate::scope::{Override, finish};
use crate::snapshot::Snapshot;
use crate::source::SettingsSource;
use crate::value::{FromSettingValue, SettingValue};


/// Lock-guarded registry shared by the whole process.
pub struct SharedSettings {
	inner: ReentrantMutex<RefCell<Settings>>,
}

impl SharedSettings {
	pub fn new(settings: Settings) -> Self {
		Self {
			inner: ReentrantMutex::new(RefCell::new(settings)),
		}
	}

	/// Runs `f` with shared access to the registry.
	pub fn read<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
		let lock = self.inner.lock();
		let settings = lock.borrow();
		f(&settings)
	}

	/// Runs `f` with exclusive access to the registry.
	pub fn write<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> R {
		let lock = self.inner.lock();
		let mut settings = lock.borrow_mut();
		f(&mut settings)
	}

	pub fn get(&self, name: &str) -> Result<SettingValue> {
		self.read(|s| s.get(name).cloned())
	}

	pub fn value<T: FromSettingValue>(&self, key: SettingKey<T>) -> Result<T> {
		self.read(|s| s.value(key))
	}

	pub fn set(&self, name: &str, value: impl Into<SettingValue>) -> Result<()> {
		self.write(|s| s.set(name, value))
	}

	pub fn defaults(&self) -> IndexMap<String, SettingValue> {
		self.read(Settings::defaults)
	}

	pub fn load_mapping<I, K, V>(&self, mapping: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<SettingValue>,
	{
		self.write(|s| s.load_mapping(mapping))
	}

	pub fn load_from_source<S: SettingsSource + ?Sized>(&self, source: &S) -> Result<()> {
		self.write(|s| s.load_from_source(source))
	}

	pub fn snapshot(&self) -> Snapshot {
		self.read(Settings::snapshot)
	}

	pub fn restore(&self, snapshot: &Snapshot) -> Result<()> {
		self.write(|s| s.restore(snapshot))
	}

	pub fn render(&self) -> String {
		self.read(Settings::render)
	}

	/// Activates `overrides` and holds the lock until the guard is released.
	pub fn override_with(&self, overrides: &Override) -> Result<SharedOverrideGuard<'_>> {
		let lock = self.inner.lock();
		let snapshot = overrides.apply(&mut lock.borrow_mut())?;
		Ok(SharedOverrideGuard {
			lock,
			snapshot: Some(snapshot),
		})
	}

	/// Runs `f` with `overrides` active, restoring afterwards.
	///
	/// `f` may use this handle freely; other threads are kept out until the
	/// registry has been restored.
	pub fn scoped<T, E, F>(&self, overrides: &Override, f: F) -> std::result::Result<T, E>
	where
		F: FnOnce() -> std::result::Result<T, E>,
		E: From<SettingsError>,
	{
		let guard = self.override_with(overrides)?;
		let result = f();
		finish(guard.release(), result)
	}

	/// Wraps `f` so that every call runs inside its own override scope.
	pub fn wrap<T, E, F>(&self, overrides: Override, mut f: F) -> impl FnMut() -> std::result::Result<T, E>
	where
		F: FnMut() -> std::result::Result<T, E>,
		E: From<SettingsError>,
	{
		move || self.scoped(&overrides, &mut f)
	}
}

impl std::fmt::Debug for SharedSettings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let lock = self.inner.lock();
		match lock.try_borrow() {
			Ok(settings) => f.debug_tuple("SharedSettings").field(&*settings).finish(),
			Err(_) => f.write_str("SharedSettings(<borrowed>)"),
		}
	}
}

/// Active override on a [`SharedSettings`], holding its lock.
#[must_use = "dropping the guard immediately restores the previous settings"]
pub struct SharedOverrideGuard<'a> {
	lock: ReentrantMutexGuard<'a, RefCell<Settings>>,
	snapshot: Option<Snapshot>,
}

impl SharedOverrideGuard<'_> {
	/// Restores the captured snapshot and releases the lock.
	pub fn release(mut self) -> Result<()> {
		self.restore()
	}

	fn restore(&mut self) -> Result<()> {
		let Some(snapshot) = self.snapshot.take() else {
			return Ok(());
		};
		debug!("leaving shared settings override");
		self.lock.borrow_mut().restore(&snapshot)
	}
}

impl Drop for SharedOverrideGuard<'_> {
	fn drop(&mut self) {
		if self.snapshot.is_some() && self.lock.try_borrow_mut().is_err() {
			error!("settings still borrowed while leaving override; restore skipped");
			return;
		}
		if let Err(err) = self.restore() {
			error!(error = %err, "failed to restore settings after override");
		}
	}
}
