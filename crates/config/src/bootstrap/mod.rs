//! Explicit start-up step.
//!
//! Nothing happens when the crate is first used: the global registry starts at
//! its defaults and stays there until [`initialize`] (or [`bootstrap_from`] on
//! a registry of your own) loads the configuration file and routes logging.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use phiconf_settings::{FileSource, SharedSettings};
use tracing::{debug, info};

use crate::error::Result;
use crate::logging::apply_logging;
use crate::{config, keys};


/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILENAME: &str = "phiconf.toml";

/// Where the bootstrapped configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
	/// Values were loaded from this file.
	File(PathBuf),
	/// No file was found; every setting is at its default.
	Defaults,
}

impl std::fmt::Display for Bootstrap {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Defaults => f.write_str("defaults"),
		}
	}
}

static BOOTSTRAP: Mutex<Option<Bootstrap>> = Mutex::new(None);

/// Bootstraps the global registry from [`CONFIG_FILENAME`].
///
/// Only the first successful run does any work; later calls return its
/// outcome. A failed run is not remembered and may be retried.
pub fn initialize() -> Result<Bootstrap> {
	let mut done = BOOTSTRAP.lock();
	if let Some(outcome) = done.as_ref() {
		return Ok(outcome.clone());
	}

	let outcome = bootstrap_from(config(), Path::new(CONFIG_FILENAME))?;
	*done = Some(outcome.clone());
	Ok(outcome)
}

/// Loads `path` into `settings` if it exists, then routes logging once.
///
/// A file that exists but cannot be read or parsed is an error; a missing file
/// leaves the registry at its current values.
pub fn bootstrap_from(settings: &SharedSettings, path: &Path) -> Result<Bootstrap> {
	let outcome = if path.exists() {
		settings.load_from_source(&FileSource::new(path))?;
		Bootstrap::File(path.to_path_buf())
	} else {
		debug!(path = %path.display(), "no configuration file; using defaults");
		Bootstrap::Defaults
	};

	settings.read(apply_logging)?;

	if settings.value(keys::LOG_CONFIG_ON_IMPORT)? {
		info!(
			version = env!("CARGO_PKG_VERSION"),
			source = %outcome,
			"phiconf configuration:\n{}",
			settings.render()
		);
	}

	Ok(outcome)
}
