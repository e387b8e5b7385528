//! Typed settings registry.
//!
//! Settings are declared once as [`Setting`] descriptors and collected into a
//! [`Schema`]. A [`Settings`] instance holds the live values for a schema and
//! funnels every write through the same validate, commit, hook sequence.
//!
//! - [`Setting`] - default, allowed values, validator, change hook, docs
//! - [`Schema`] - shared descriptor table; binds descriptor names
//! - [`Settings`] - live values, bulk loading, snapshots, rendering
//! - [`Override`] / [`OverrideGuard`] - temporary values restored on scope exit
//! - [`SharedSettings`] - lock-guarded process-wide registry
//! - [`SettingsSource`] - external key/value data (TOML or JSON files)
//!
//! # Example
//!
//! ```ignore
//! let schema = Arc::new(Schema::new([
//!     ("LEVEL", Setting::new("WARN").values(["DEBUG", "WARN", "ERROR"])),
//!     ("RETRIES", Setting::new(3)),
//! ]));
//! let mut settings = Settings::new(schema);
//!
//! settings.set("LEVEL", "DEBUG")?;
//! Override::new().with("RETRIES", 10).scope(&mut settings, |s| run(s))?;
//! ```

mod error;
mod key;
mod registry;
mod schema;
mod scope;
mod setting;
mod shared;
mod snapshot;
pub mod source;
mod value;
pub mod validators;

pub use error::{BoxError, Result, SettingsError};
pub use key::SettingKey;
pub use registry::Settings;
pub use schema::Schema;
pub use scope::{Override, OverrideGuard};
pub use setting::{ChangeHook, Documentation, Setting, SettingValidator};
pub use shared::{SharedOverrideGuard, SharedSettings};
pub use snapshot::Snapshot;
pub use source::{FileFormat, FileSource, MappingSource, SettingsSource};
pub use value::{FromSettingValue, SettingValue};
