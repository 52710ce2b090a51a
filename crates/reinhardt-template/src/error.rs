//! Template error types

use thiserror::Error;

/// Errors raised while rendering a template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
	/// No template is registered under the requested name
	#[error("Template not found: {0}")]
	NotFound(String),

	/// The template source could not be parsed
	#[error("Invalid template '{name}': {reason}")]
	Syntax {
		/// Template name
		name: String,
		/// Parser message
		reason: String,
	},

	/// The render data is not usable as a template context
	#[error("Invalid template context: {0}")]
	Context(String),

	/// The template failed while rendering
	#[error("Template rendering failed: {0}")]
	Render(String),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
