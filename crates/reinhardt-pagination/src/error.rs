//! Error types for reinhardt-pagination

use thiserror::Error;

/// Error type for pagination operations
///
/// Only programmer errors and explicitly strict decoding surface as errors.
/// Bad values coming from a request (unknown page size, garbled cursor)
/// are absorbed by the lenient entry points instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
	/// A cursor token could not be decoded
	#[error("Invalid cursor: {0}")]
	InvalidCursor(String),

	/// A row field could not be converted into a cursor key
	#[error("Invalid cursor field value {value:?}: {reason}")]
	InvalidCursorField {
		/// The raw field value
		value: String,
		/// Why the value was rejected
		reason: String,
	},

	/// A page size of zero was passed to the paginator
	#[error("Invalid page size: {0}")]
	InvalidPageSize(usize),

	/// The page size allow-list is unusable
	#[error("Invalid page size options: {0}")]
	InvalidPageSizeOptions(String),
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;
