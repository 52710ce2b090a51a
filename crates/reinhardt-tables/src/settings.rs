//! Table configuration
//!
//! Settings can be built in code or loaded from TOML or JSON. Every field
//! has a default, so a file only needs the values it changes.
//!
//! ```toml
//! page_sizes = [10, 25, 50]
//! default_page_size = 25
//! pager_position = "both"
//! passthrough_params = ["q"]
//! ```

use crate::pager::PagerPosition;
use reinhardt_pagination::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES, PageSizeOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("Settings file error: {0}")]
	FileError(String),

	/// The settings source could not be parsed
	#[error("Settings parse error: {0}")]
	ParseError(String),

	/// The file extension is not a supported format
	#[error("Unsupported settings format: {0}")]
	UnsupportedFormat(String),

	/// The settings parsed but are inconsistent
	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Display and pagination settings shared by the tables of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Allowed page sizes
	pub page_sizes: Vec<usize>,
	/// Page size used when the request has none or an invalid one
	pub default_page_size: usize,
	/// Where the pager is shown
	pub pager_position: PagerPosition,
	/// Extra query parameters carried into sort links and pager forms
	pub passthrough_params: Vec<String>,
	/// Draw borders between columns
	pub show_vertical_borders: bool,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
			default_page_size: DEFAULT_PAGE_SIZE,
			pager_position: PagerPosition::default(),
			passthrough_params: Vec::new(),
			show_vertical_borders: false,
		}
	}
}

impl TableSettings {
	/// Load settings from a configuration file
	///
	/// The format is chosen by extension: `.toml` or `.json`.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents)?,
			Some("json") => Self::from_json_str(&contents)?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		tracing::debug!(path = %path.display(), "loaded table settings");
		Ok(settings)
	}

	/// Parses settings from TOML
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parses settings from JSON
	pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(source)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the page size allow-list is usable
	pub fn validate(&self) -> Result<(), SettingsError> {
		self.page_size_options().map(|_| ())
	}

	/// Returns the validated page size allow-list
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::TableSettings;
	///
	/// let options = TableSettings::default().page_size_options().unwrap();
	/// assert_eq!(options.sizes(), &[5, 10, 25, 50, 100]);
	/// assert_eq!(options.resolve(Some("999")), 5);
	/// ```
	pub fn page_size_options(&self) -> Result<PageSizeOptions, SettingsError> {
		PageSizeOptions::new(self.page_sizes.clone(), self.default_page_size)
			.map_err(|e| SettingsError::Invalid(e.to_string()))
	}

	/// Sets the page size allow-list and default
	pub fn page_sizes(mut self, sizes: Vec<usize>, default: usize) -> Self {
		self.page_sizes = sizes;
		self.default_page_size = default;
		self
	}

	/// Sets the pager position
	pub fn pager_position(mut self, position: PagerPosition) -> Self {
		self.pager_position = position;
		self
	}

	/// Adds a query parameter to carry through sort links and paging
	pub fn passthrough(mut self, name: impl Into<String>) -> Self {
		self.passthrough_params.push(name.into());
		self
	}

	/// Sets whether vertical borders are drawn
	pub fn show_vertical_borders(mut self, show: bool) -> Self {
		self.show_vertical_borders = show;
		self
	}
}
