use std::io::Write;

use super::*;

fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[test]
fn test_format_from_extension() {
	assert_eq!(FileFormat::from_path(Path::new("a/settings.json")), FileFormat::Json);
	assert_eq!(FileFormat::from_path(Path::new("settings.JSON")), FileFormat::Json);
	assert_eq!(FileFormat::from_path(Path::new("settings.toml")), FileFormat::Toml);
	assert_eq!(FileFormat::from_path(Path::new("settings")), FileFormat::Toml);
}

#[test]
fn test_read_toml_preserves_order() {
	let file = write_file(
		".toml",
		r#"
PRECISION = 20
MEASURE = "KLD"
PARALLEL_CUT_EVALUATION = false

[REDIS_CONFIG]
host = "cache"
port = 6380
"#,
	);

	let values = FileSource::new(file.path()).read().unwrap();

	assert_eq!(
		values.keys().map(String::as_str).collect::<Vec<_>>(),
		["PRECISION", "MEASURE", "PARALLEL_CUT_EVALUATION", "REDIS_CONFIG"]
	);
	assert_eq!(values["PRECISION"], SettingValue::Int(20));
	assert_eq!(values["MEASURE"], SettingValue::from("KLD"));
	assert_eq!(values["PARALLEL_CUT_EVALUATION"], SettingValue::Bool(false));
	assert_eq!(
		values["REDIS_CONFIG"].as_map().and_then(|m| m.get("port")),
		Some(&SettingValue::Int(6380))
	);
}

#[test]
fn test_read_json() {
	let file = write_file(".json", r#"{"LOG_STDOUT_LEVEL": null, "REPR_VERBOSITY": 1}"#);

	let values = FileSource::new(file.path()).read().unwrap();

	assert_eq!(values["LOG_STDOUT_LEVEL"], SettingValue::Null);
	assert_eq!(values["REPR_VERBOSITY"], SettingValue::Int(1));
}

#[test]
fn test_missing_file_is_unavailable() {
	let dir = tempfile::tempdir().unwrap();
	let source = FileSource::new(dir.path().join("absent.toml"));

	let err = source.read().unwrap_err();
	assert!(matches!(err, SettingsError::SourceUnavailable { .. }));
}

#[test]
fn test_malformed_file_is_unavailable() {
	let file = write_file(".toml", "PRECISION = = 3");

	let err = FileSource::new(file.path()).read().unwrap_err();
	match err {
		SettingsError::SourceUnavailable { origin, .. } => {
			assert_eq!(origin, file.path().display().to_string());
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn test_explicit_format_overrides_extension() {
	let file = write_file(".conf", r#"{"A": 1}"#);

	let values = FileSource::new(file.path()).with_format(FileFormat::Json).read().unwrap();
	assert_eq!(values["A"], SettingValue::Int(1));
}

#[test]
fn test_mapping_source() {
	let source: MappingSource = [("A", SettingValue::Int(1)), ("B", SettingValue::Null)].into_iter().collect();
	let values = source.read().unwrap();
	assert_eq!(values.len(), 2);
	assert_eq!(source.origin(), "in-memory mapping");
}
