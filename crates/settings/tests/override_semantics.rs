use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use phiconf_settings::{BoxError, Override, Schema, Setting, SettingValue, Settings, SettingsError};

static ROUTING_CHANGES: AtomicUsize = AtomicUsize::new(0);

fn reroute(settings: &Settings) -> Result<(), BoxError> {
	// The hook always sees a committed, valid level.
	let level = settings.get("LEVEL")?;
	assert!(matches!(level.as_str(), Some("DEBUG" | "WARN" | "ERROR")));
	ROUTING_CHANGES.fetch_add(1, Ordering::SeqCst);
	Ok(())
}

fn scenario() -> Settings {
	Settings::new(Arc::new(Schema::new([
		(
			"LEVEL",
			Setting::new("WARN")
				.values(["DEBUG", "WARN", "ERROR"])
				.on_change(reroute)
				.description("Minimum level routed to the console."),
		),
		("RETRIES", Setting::new(3).description("Attempts before giving up.")),
	])))
}

fn level(settings: &Settings) -> SettingValue {
	settings.get("LEVEL").cloned().unwrap()
}

fn retries(settings: &Settings) -> SettingValue {
	settings.get("RETRIES").cloned().unwrap()
}

#[test]
fn level_and_retries_scenario() {
	let mut settings = scenario();

	settings.set("LEVEL", "DEBUG").unwrap();
	assert_eq!(level(&settings), SettingValue::from("DEBUG"));

	let err = settings.set("LEVEL", "INFO").unwrap_err();
	assert!(matches!(err, SettingsError::InvalidValue { .. }));
	assert_eq!(level(&settings), SettingValue::from("DEBUG"));

	let overrides = Override::new().with("RETRIES", 10);
	overrides
		.scope(&mut settings, |s| -> Result<(), SettingsError> {
			assert_eq!(retries(s), SettingValue::Int(10));
			Ok(())
		})
		.unwrap();
	assert_eq!(retries(&settings), SettingValue::Int(3));

	settings.set("RETRIES", 5).unwrap();
	overrides
		.scope(&mut settings, |s| -> Result<(), SettingsError> {
			assert_eq!(retries(s), SettingValue::Int(10));
			Ok(())
		})
		.unwrap();
	assert_eq!(retries(&settings), SettingValue::Int(5));
}

#[test]
fn restore_runs_change_hooks() {
	let mut settings = scenario();
	let before = ROUTING_CHANGES.load(Ordering::SeqCst);

	{
		let guard = Override::new().with("LEVEL", "ERROR").enter(&mut settings).unwrap();
		assert_eq!(level(&guard), SettingValue::from("ERROR"));
	}

	// One run for the override, one for restoring the snapshot.
	assert!(ROUTING_CHANGES.load(Ordering::SeqCst) >= before + 2);
	assert_eq!(level(&settings), SettingValue::from("WARN"));
}

#[test]
fn nested_overrides_unwind_in_order() {
	let mut settings = scenario();
	let s0 = settings.snapshot();

	let mut outer = Override::new().with("RETRIES", 1).enter(&mut settings).unwrap();
	let s1 = outer.snapshot();

	Override::new()
		.with("LEVEL", "DEBUG")
		.with("RETRIES", 2)
		.scope(&mut outer, |s| -> Result<(), SettingsError> {
			assert_eq!(level(s), SettingValue::from("DEBUG"));
			assert_eq!(retries(s), SettingValue::Int(2));
			Ok(())
		})
		.unwrap();

	assert_eq!(outer.snapshot(), s1);
	drop(outer);
	assert_eq!(settings.snapshot(), s0);
}

#[test]
fn describe_reports_documentation() {
	let settings = scenario();
	let doc = settings.schema().describe("LEVEL").unwrap();
	assert_eq!(
		doc.to_string(),
		"default=\"WARN\"\nvalues=[\"DEBUG\", \"WARN\", \"ERROR\"]\nMinimum level routed to the console."
	);
}
