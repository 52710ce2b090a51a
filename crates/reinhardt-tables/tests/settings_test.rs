//! Loading table settings from configuration files

use reinhardt_tables::{PagerPosition, SettingsError, TableSettings};
use rstest::rstest;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn settings_file(suffix: &str, contents: &str) -> NamedTempFile {
	let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file.flush().unwrap();
	file
}

#[rstest]
fn test_load_toml() {
	// Arrange
	let file = settings_file(
		".toml",
		r#"
page_sizes = [10, 25, 50]
default_page_size = 25
pager_position = "both"
passthrough_params = ["q", "category"]
show_vertical_borders = true
"#,
	);

	// Act
	let settings = TableSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.page_sizes, vec![10, 25, 50]);
	assert_eq!(settings.default_page_size, 25);
	assert_eq!(settings.pager_position, PagerPosition::Both);
	assert_eq!(settings.passthrough_params, vec!["q", "category"]);
	assert!(settings.show_vertical_borders);
}

#[rstest]
fn test_load_json() {
	// Arrange
	let file = settings_file(".json", r#"{"pager_position": "top", "passthrough_params": ["q"]}"#);

	// Act
	let settings = TableSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.pager_position, PagerPosition::Top);
	assert_eq!(settings.passthrough_params, vec!["q"]);
	assert_eq!(settings.page_sizes, vec![5, 10, 25, 50, 100]);
}

#[rstest]
fn test_unsupported_extension() {
	// Arrange
	let file = settings_file(".yaml", "pager_position: top\n");

	// Act
	let result = TableSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
}

#[rstest]
fn test_missing_file() {
	// Arrange
	let dir = tempfile::tempdir().unwrap();

	// Act
	let result = TableSettings::from_file(dir.path().join("tables.toml"));

	// Assert
	assert!(matches!(result, Err(SettingsError::FileError(_))));
}

#[rstest]
#[case::malformed_toml(".toml", "page_sizes = [10,")]
#[case::wrong_type(".json", r#"{"page_sizes": "ten"}"#)]
fn test_parse_errors(#[case] suffix: &str, #[case] contents: &str) {
	// Arrange
	let file = settings_file(suffix, contents);

	// Act
	let result = TableSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::ParseError(_))));
}

#[rstest]
fn test_file_with_inconsistent_page_sizes() {
	// Arrange
	let file = settings_file(".toml", "page_sizes = [10, 20]\ndefault_page_size = 5\n");

	// Act
	let result = TableSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::Invalid(_))));
}
