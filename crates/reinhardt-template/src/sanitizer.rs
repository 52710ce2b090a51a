//! Text and attribute sanitization applied before data reaches a template

use crate::attributes::Attributes;
use crate::escaping::escape_html;

/// Sanitizes user-provided text and attribute maps
///
/// Text is HTML-escaped. Attribute maps lose entries whose names could break
/// out of the tag; values are left for [`resolve`](crate::resolve) to escape.
///
/// # Examples
///
/// ```
/// use reinhardt_template::{Attributes, Sanitizer};
///
/// let sanitizer = Sanitizer::new();
/// assert_eq!(sanitizer.sanitize_text("<i>Io</i>"), "&lt;i&gt;Io&lt;/i&gt;");
///
/// let mut attributes = Attributes::new();
/// attributes.insert("onclick\" x=\"".into(), "evil()".into());
/// attributes.insert("data-id".into(), "7".into());
/// let clean = sanitizer.sanitize_attributes(&attributes);
/// assert_eq!(clean.len(), 1);
/// assert!(clean.contains_key("data-id"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
	/// Creates a sanitizer
	pub fn new() -> Self {
		Self
	}

	/// Escapes text for HTML output
	pub fn sanitize_text(&self, text: &str) -> String {
		escape_html(text)
	}

	/// Returns a copy of `attributes` without entries whose names are invalid
	pub fn sanitize_attributes(&self, attributes: &Attributes) -> Attributes {
		attributes
			.iter()
			.filter(|(name, _)| {
				let valid = is_valid_attribute_name(name);
				if !valid {
					tracing::warn!(attribute = %name, "dropping attribute with invalid name");
				}
				valid
			})
			.map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
			.collect()
	}
}

/// Attribute names per the HTML syntax: no whitespace, controls, quotes,
/// `>`, `/` or `=`
fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& name.chars().all(|c| {
			!c.is_whitespace()
				&& !c.is_control()
				&& !matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '`')
		})
}
