//! Template engines
//!
//! Renderers never talk to Tera directly. They hand a JSON value to a
//! [`TemplateEngine`] and receive HTML back, so hosts can plug in their own
//! engine or override individual built-in templates.

use crate::error::{Result, TemplateError};
use once_cell::sync::Lazy;
use serde_json::Value;
use tera::{Context, Tera};

/// Name of the built-in table template
pub const TABLE_TEMPLATE: &str = "table";
/// Name of the built-in pager template
pub const PAGER_TEMPLATE: &str = "pager";
/// Name of the built-in select template
pub const SELECT_TEMPLATE: &str = "select";

// Built-in templates, parsed once and cloned into every engine
static BUILTIN: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();

	tera.add_raw_template(TABLE_TEMPLATE, include_str!("../templates/table.html"))
		.expect("Failed to add table template");
	tera.add_raw_template(PAGER_TEMPLATE, include_str!("../templates/pager.html"))
		.expect("Failed to add pager template");
	tera.add_raw_template(SELECT_TEMPLATE, include_str!("../templates/select.html"))
		.expect("Failed to add select template");

	// render data is sanitized before it reaches a template
	tera.autoescape_on(Vec::new());
	tera
});

/// Renders a named template with JSON data
pub trait TemplateEngine: Send + Sync {
	/// Renders `name` with `data` as the template context
	///
	/// `data` must be a JSON object.
	fn render(&self, name: &str, data: &Value) -> Result<String>;
}

/// Tera-backed engine preloaded with the `table`, `pager` and `select`
/// templates
///
/// # Examples
///
/// ```
/// use reinhardt_template::{TemplateEngine, TeraEngine};
/// use serde_json::json;
///
/// let engine = TeraEngine::new()
///     .with_template("greeting", "Hello {{ name }}")
///     .unwrap();
///
/// let html = engine.render("greeting", &json!({ "name": "Io" })).unwrap();
/// assert_eq!(html, "Hello Io");
/// ```
#[derive(Debug, Clone)]
pub struct TeraEngine {
	tera: Tera,
}

impl TeraEngine {
	/// Creates an engine holding the built-in templates
	pub fn new() -> Self {
		Self {
			tera: BUILTIN.clone(),
		}
	}

	/// Adds a template, replacing any existing one with the same name
	///
	/// # Errors
	///
	/// Returns [`TemplateError::Syntax`] if `source` does not parse.
	pub fn with_template(mut self, name: &str, source: &str) -> Result<Self> {
		self.tera
			.add_raw_template(name, source)
			.map_err(|e| TemplateError::Syntax {
				name: name.to_string(),
				reason: describe(&e),
			})?;
		Ok(self)
	}

	/// Returns true if a template named `name` is registered
	pub fn has_template(&self, name: &str) -> bool {
		self.tera.get_template_names().any(|n| n == name)
	}
}

impl Default for TeraEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl TemplateEngine for TeraEngine {
	fn render(&self, name: &str, data: &Value) -> Result<String> {
		if !self.has_template(name) {
			return Err(TemplateError::NotFound(name.to_string()));
		}
		if !data.is_object() {
			return Err(TemplateError::Context(format!(
				"expected a JSON object, got {}",
				kind_of(data)
			)));
		}

		let context =
			Context::from_value(data.clone()).map_err(|e| TemplateError::Context(describe(&e)))?;

		tracing::trace!(template = name, "rendering template");
		self.tera
			.render(name, &context)
			.map_err(|e| TemplateError::Render(describe(&e)))
	}
}

// Tera nests the useful message in the error source chain
fn describe(err: &tera::Error) -> String {
	let mut message = err.to_string();
	let mut source = std::error::Error::source(err);
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
