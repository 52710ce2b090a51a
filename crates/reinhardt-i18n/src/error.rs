//! Localization error types

use thiserror::Error;

/// Errors raised while loading message catalogs
#[derive(Debug, Error)]
pub enum I18nError {
	/// The catalog file could not be read
	#[error("Failed to read message catalog: {0}")]
	Io(#[from] std::io::Error),

	/// The catalog source is not valid JSON
	#[error("Invalid message catalog: {0}")]
	Parse(#[from] serde_json::Error),

	/// The catalog is valid JSON but not a flat object of strings
	#[error("Invalid message '{key}': {reason}")]
	InvalidMessage {
		/// Offending key
		key: String,
		/// Why it was rejected
		reason: String,
	},
}

/// Result type for localization operations
pub type Result<T> = std::result::Result<T, I18nError>;
