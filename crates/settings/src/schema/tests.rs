use super::*;

fn schema() -> Schema {
	Schema::new([
		("LEVEL", Setting::new("WARN").values(["DEBUG", "WARN", "ERROR"])),
		("RETRIES", Setting::new(3)),
	])
}

#[test]
fn test_binds_names() {
	let schema = schema();
	assert_eq!(schema.get("LEVEL").and_then(Setting::name), Some("LEVEL"));
	assert_eq!(schema.get("RETRIES").and_then(Setting::name), Some("RETRIES"));
}

#[test]
fn test_declaration_order() {
	let schema = schema();
	assert_eq!(schema.names().collect::<Vec<_>>(), ["LEVEL", "RETRIES"]);
	assert_eq!(schema.len(), 2);
}

#[test]
fn test_defaults() {
	let defaults = schema().defaults();
	assert_eq!(defaults["LEVEL"], SettingValue::from("WARN"));
	assert_eq!(defaults["RETRIES"], SettingValue::Int(3));
}

#[test]
#[should_panic(expected = "declared twice")]
fn test_duplicate_name_panics() {
	Schema::new([("A", Setting::new(1)), ("A", Setting::new(2))]);
}

#[test]
fn test_suggest() {
	let schema = schema();
	assert_eq!(schema.suggest("RETRYS").as_deref(), Some("RETRIES"));
	assert_eq!(schema.suggest("level").as_deref(), Some("LEVEL"));
	assert_eq!(schema.suggest("PRECISION"), None);
}

#[test]
fn test_describe() {
	let schema = schema();
	let doc = schema.describe("LEVEL").unwrap();
	assert_eq!(doc.default, SettingValue::from("WARN"));
	assert!(schema.describe("MISSING").is_none());
}
