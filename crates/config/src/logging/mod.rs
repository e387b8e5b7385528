//! Log routing driven by settings.
//!
//! [`configure_logging`] is the change hook of `LOG_FILE`, `LOG_FILE_LEVEL`
//! and `LOG_STDOUT_LEVEL`. It derives a [`LogSinks`] description from the
//! registry and swaps it into a reloadable layer on the global `tracing`
//! subscriber, which is installed the first time routing is applied.
//!
//! Two sinks share one format:
//! - file sink, enabled when `LOG_FILE_LEVEL` is not blank, appending to
//!   `LOG_FILE`
//! - console sink on stdout, enabled when `LOG_STDOUT_LEVEL` is not blank
//!
//! Applying the same sinks twice is a no-op, so the hook can run on every
//! write, including each restore of an override.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use phiconf_settings::{BoxError, Settings};
use tracing::{Level, debug};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry, fmt, reload};

use crate::error::LoggingError;
use crate::keys;


/// Level names accepted by the level settings.
pub const LEVEL_NAMES: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
type SinkHandle = reload::Handle<Vec<BoxedLayer>, Registry>;

/// Change hook that re-routes log output from the current settings.
pub fn configure_logging(settings: &Settings) -> Result<(), BoxError> {
	apply_logging(settings)?;
	Ok(())
}

/// Routes log output from the current settings.
///
/// Returns `true` if the routing changed.
pub fn apply_logging(settings: &Settings) -> Result<bool, LoggingError> {
	LogSinks::from_settings(settings)?.apply()
}

/// Returns `true` once this crate owns the global subscriber.
pub fn is_installed() -> bool {
	ROUTER.handle.get().is_some_and(Option::is_some)
}

/// Maps a level name to a `tracing` level.
///
/// `CRITICAL` has no counterpart and maps to `ERROR`.
pub fn parse_level(name: &str) -> Result<Level, LoggingError> {
	match name.to_ascii_uppercase().as_str() {
		"TRACE" => Ok(Level::TRACE),
		"DEBUG" => Ok(Level::DEBUG),
		"INFO" => Ok(Level::INFO),
		"WARNING" | "WARN" => Ok(Level::WARN),
		"ERROR" | "CRITICAL" => Ok(Level::ERROR),
		_ => Err(LoggingError::UnknownLevel(name.to_string())),
	}
}

/// File sink target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
	pub path: PathBuf,
	pub level: Level,
}

/// Which sinks are enabled, and at what level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSinks {
	pub file: Option<FileSink>,
	pub stdout: Option<Level>,
}

impl LogSinks {
	/// Reads the logging settings.
	pub fn from_settings(settings: &Settings) -> Result<Self, LoggingError> {
		let file = match settings.value(keys::LOG_FILE_LEVEL)? {
			Some(level) => Some(FileSink {
				path: PathBuf::from(settings.value(keys::LOG_FILE)?),
				level: parse_level(&level)?,
			}),
			None => None,
		};
		let stdout = settings
			.value(keys::LOG_STDOUT_LEVEL)?
			.map(|level| parse_level(&level))
			.transpose()?;

		Ok(Self { file, stdout })
	}

	/// Installs these sinks, unless they are already in place.
	///
	/// Returns `true` if the routing changed.
	pub fn apply(self) -> Result<bool, LoggingError> {
		ROUTER.apply(self)
	}

	fn layers(&self) -> Result<Vec<BoxedLayer>, LoggingError> {
		let mut layers = Vec::with_capacity(2);

		if let Some(file) = &self.file {
			let handle = OpenOptions::new()
				.create(true)
				.append(true)
				.open(&file.path)
				.map_err(|error| LoggingError::OpenLogFile {
					path: file.path.clone(),
					error,
				})?;
			layers.push(sink_layer(Arc::new(handle).with_max_level(file.level)));
		}

		if let Some(level) = self.stdout {
			layers.push(sink_layer(std::io::stdout.with_max_level(level)));
		}

		Ok(layers)
	}
}

/// Shared output format of every sink.
fn sink_layer<W>(writer: W) -> BoxedLayer
where
	W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
	fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_thread_names(true)
		.boxed()
}

struct LogRouter {
	handle: OnceLock<Option<SinkHandle>>,
	applied: Mutex<Option<LogSinks>>,
}

static ROUTER: LogRouter = LogRouter {
	handle: OnceLock::new(),
	applied: Mutex::new(None),
};

impl LogRouter {
	fn handle(&self) -> Option<&SinkHandle> {
		self.handle
			.get_or_init(|| {
				let (layer, handle) = reload::Layer::new(Vec::new());
				let subscriber = tracing_subscriber::registry().with(layer);
				tracing::subscriber::set_global_default(subscriber)
					.ok()
					.map(|()| handle)
			})
			.as_ref()
	}

	fn apply(&self, sinks: LogSinks) -> Result<bool, LoggingError> {
		let mut applied = self.applied.lock();
		if applied.as_ref() == Some(&sinks) {
			return Ok(false);
		}

		let layers = sinks.layers()?;
		match self.handle() {
			Some(handle) => handle.reload(layers)?,
			None => debug!("global subscriber owned by the host; log routing left unchanged"),
		}

		debug!(file = ?sinks.file, stdout = ?sinks.stdout, "log routing updated");
		*applied = Some(sinks);
		Ok(true)
	}
}
