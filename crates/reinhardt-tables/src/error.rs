//! Error types for table operations

use crate::settings::SettingsError;
use reinhardt_pagination::PaginationError;
use reinhardt_template::TemplateError;
use thiserror::Error;

/// Errors raised while building or rendering a table
///
/// Query-originated input never produces one of these: bad `sort`,
/// `offset` and `limit` values fall back to defaults instead.
#[derive(Debug, Error)]
pub enum TableError {
	/// Two columns share the same id
	#[error("Duplicate column id: {0}")]
	DuplicateColumn(String),

	/// A column id referenced by the configuration does not exist
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// The configured sort column cannot be sorted
	#[error("Column is not sortable: {0}")]
	UnsortableColumn(String),

	/// A row lacks the field pagination cursors are derived from
	#[error("Row {index} has no value for cursor field '{field}'")]
	MissingCursorField {
		/// Position of the row in the input collection
		index: usize,
		/// Cursor field name
		field: String,
	},

	/// Row input does not have the shape of a row
	#[error("Invalid row: {0}")]
	InvalidRow(String),

	/// Pagination failure
	#[error(transparent)]
	Pagination(#[from] PaginationError),

	/// Template failure
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// Settings failure
	#[error(transparent)]
	Settings(#[from] SettingsError),

	/// Render data could not be converted to a template context
	#[error("Failed to serialize render data: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
