use std::cell::RefCell;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::error::BoxError;
use crate::setting::Setting;
use crate::source::MappingSource;

thread_local! {
	static OBSERVED: RefCell<Vec<SettingValue>> = const { RefCell::new(Vec::new()) };
}

fn observe_level(settings: &Settings) -> std::result::Result<(), BoxError> {
	let level = settings.get("LEVEL")?.clone();
	OBSERVED.with(|seen| seen.borrow_mut().push(level));
	Ok(())
}

fn reject_everything(_: &Settings) -> std::result::Result<(), BoxError> {
	Err("sink unavailable".into())
}

fn schema() -> Arc<Schema> {
	Arc::new(Schema::new([
		(
			"LEVEL",
			Setting::new("WARN")
				.values(["DEBUG", "WARN", "ERROR"])
				.on_change(observe_level),
		),
		("RETRIES", Setting::new(3)),
		("PATH", Setting::new("out.log").on_change(reject_everything)),
	]))
}

#[test]
fn test_starts_at_defaults() {
	let settings = Settings::new(schema());
	assert_eq!(settings.get("LEVEL").unwrap(), &SettingValue::from("WARN"));
	assert_eq!(settings.get("RETRIES").unwrap(), &SettingValue::Int(3));
	assert_eq!(settings.defaults(), settings.snapshot().into_inner());
}

#[test]
fn test_unknown_name_rejected() {
	let mut settings = Settings::new(schema());

	let err = settings.get("TIMEOUT").unwrap_err();
	assert!(matches!(err, SettingsError::UnknownSetting { ref name, .. } if name == "TIMEOUT"));

	let err = settings.set("RETRYS", 4).unwrap_err();
	assert_eq!(err.to_string(), "unknown setting: RETRYS (did you mean 'RETRIES'?)");
	assert_eq!(settings.get("RETRIES").unwrap(), &SettingValue::Int(3));
}

#[test]
fn test_invalid_value_does_not_commit() {
	let mut settings = Settings::new(schema());
	settings.set("LEVEL", "DEBUG").unwrap();

	let err = settings.set("LEVEL", "INFO").unwrap_err();
	assert!(matches!(err, SettingsError::InvalidValue { .. }));
	assert_eq!(settings.get("LEVEL").unwrap(), &SettingValue::from("DEBUG"));
}

#[test]
fn test_hook_sees_committed_value() {
	OBSERVED.with(|seen| seen.borrow_mut().clear());
	let mut settings = Settings::new(schema());

	settings.set("LEVEL", "ERROR").unwrap();
	settings.set("LEVEL", "DEBUG").unwrap();

	let seen = OBSERVED.with(|seen| seen.borrow().clone());
	assert_eq!(seen, vec![SettingValue::from("ERROR"), SettingValue::from("DEBUG")]);
}

#[test]
fn test_hook_not_run_on_rejected_write() {
	OBSERVED.with(|seen| seen.borrow_mut().clear());
	let mut settings = Settings::new(schema());

	assert!(settings.set("LEVEL", "TRACE").is_err());
	assert!(OBSERVED.with(|seen| seen.borrow().is_empty()));
}

#[test]
fn test_hook_failure_after_commit() {
	let mut settings = Settings::new(schema());

	let err = settings.set("PATH", "other.log").unwrap_err();
	assert!(matches!(err, SettingsError::HookFailure { ref setting, .. } if setting == "PATH"));
	assert_eq!(settings.get("PATH").unwrap(), &SettingValue::from("other.log"));
}

#[test]
fn test_load_mapping_stops_at_first_failure() {
	let mut settings = Settings::new(schema());

	let err = settings
		.load_mapping([
			("RETRIES", SettingValue::Int(9)),
			("LEVEL", SettingValue::from("VERBOSE")),
			("LEVEL", SettingValue::from("ERROR")),
		])
		.unwrap_err();

	assert!(matches!(err, SettingsError::InvalidValue { .. }));
	assert_eq!(settings.get("RETRIES").unwrap(), &SettingValue::Int(9));
	assert_eq!(settings.get("LEVEL").unwrap(), &SettingValue::from("WARN"));
}

#[test]
fn test_restore_writes_past_hook_failure() {
	let mut settings = Settings::new(Arc::new(Schema::new([
		("PATH", Setting::new("out.log").on_change(reject_everything)),
		("RETRIES", Setting::new(3)),
	])));
	let snapshot = settings.snapshot();

	assert!(settings.set("PATH", "other.log").is_err());
	settings.set("RETRIES", 10).unwrap();

	let err = settings.restore(&snapshot).unwrap_err();

	assert!(matches!(err, SettingsError::HookFailure { ref setting, .. } if setting == "PATH"));
	assert_eq!(settings.snapshot(), snapshot);
}

#[test]
fn test_load_from_source() {
	let mut settings = Settings::new(schema());
	let source = MappingSource::from_iter([("RETRIES", 5)]);

	settings.load_from_source(&source).unwrap();
	assert_eq!(settings.get("RETRIES").unwrap(), &SettingValue::Int(5));
}

#[test]
fn test_snapshot_is_independent() {
	let mut settings = Settings::new(schema());
	let snapshot = settings.snapshot();

	settings.set("RETRIES", 10).unwrap();

	assert_eq!(snapshot.get("RETRIES"), Some(&SettingValue::Int(3)));
	assert_eq!(settings.get("RETRIES").unwrap(), &SettingValue::Int(10));
}

#[test]
fn test_typed_value() {
	const RETRIES: SettingKey<i64> = SettingKey::new("RETRIES");
	const LEVEL_AS_BOOL: SettingKey<bool> = SettingKey::new("LEVEL");

	let settings = Settings::new(schema());
	assert_eq!(settings.value(RETRIES).unwrap(), 3);

	let err = settings.value(LEVEL_AS_BOOL).unwrap_err();
	assert_eq!(
		err.to_string(),
		"type mismatch for setting 'LEVEL': expected bool, got string"
	);
}

#[test]
fn test_render_sorted() {
	let mut settings = Settings::new(schema());
	settings.set("RETRIES", 7).unwrap();

	assert_eq!(settings.render(), "LEVEL: \"WARN\"\nPATH: \"out.log\"\nRETRIES: 7");
}

fn int_schema() -> Arc<Schema> {
	Arc::new(Schema::new(
		["A", "B", "C", "D"].map(|name| (name, Setting::new(0))),
	))
}

proptest! {
	#[test]
	fn snapshot_restore_round_trip(
		before in proptest::collection::vec((0usize..4, any::<i64>()), 0..16),
		after in proptest::collection::vec((0usize..4, any::<i64>()), 0..16),
	) {
		const NAMES: [&str; 4] = ["A", "B", "C", "D"];
		let mut settings = Settings::new(int_schema());

		for (idx, value) in before {
			settings.set(NAMES[idx], value).unwrap();
		}
		let expected = settings.snapshot();

		for (idx, value) in after {
			settings.set(NAMES[idx], value).unwrap();
		}
		settings.restore(&expected).unwrap();

		prop_assert_eq!(settings.snapshot(), expected);
	}
}
