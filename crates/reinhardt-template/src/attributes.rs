//! HTML attribute maps and their resolution into markup
//!
//! Attributes are kept in insertion order. `class` is never emitted by
//! [`resolve`]; renderers place it themselves via [`resolve_classes`] so it
//! can be merged with the component's own classes.

use crate::escaping::escape_html_attr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
	/// Boolean attribute: `true` emits the bare name, `false` omits it
	Flag(bool),
	/// Plain text value
	Text(String),
	/// Space-separated token list
	List(Vec<String>),
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<Vec<&str>> for AttributeValue {
	fn from(value: Vec<&str>) -> Self {
		Self::List(value.into_iter().map(str::to_string).collect())
	}
}

/// Ordered attribute map
pub type Attributes = IndexMap<String, AttributeValue>;

/// Serializes attributes into an HTML attribute string
///
/// Names and values are escaped. `class`, `false` flags and empty lists are
/// skipped.
///
/// # Examples
///
/// ```
/// use reinhardt_template::{Attributes, AttributeValue, resolve};
///
/// let mut attributes = Attributes::new();
/// attributes.insert("data-role".into(), "grid".into());
/// attributes.insert("hidden".into(), true.into());
/// attributes.insert("class".into(), "ignored".into());
/// attributes.insert("aria-busy".into(), false.into());
///
/// assert_eq!(resolve(&attributes), r#"data-role="grid" hidden"#);
/// ```
pub fn resolve(attributes: &Attributes) -> String {
	attributes
		.iter()
		.filter(|(name, _)| name.as_str() != "class")
		.filter_map(|(name, value)| {
			let name = escape_html_attr(name);
			match value {
				AttributeValue::Flag(true) => Some(name),
				AttributeValue::Flag(false) => None,
				AttributeValue::Text(text) => Some(format!("{}=\"{}\"", name, escape_html_attr(text))),
				AttributeValue::List(items) if items.is_empty() => None,
				AttributeValue::List(items) => {
					Some(format!("{}=\"{}\"", name, escape_html_attr(&items.join(" "))))
				}
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Returns the escaped value of the `class` attribute, or an empty string
pub fn resolve_classes(attributes: &Attributes) -> String {
	match attributes.get("class") {
		Some(AttributeValue::Text(text)) => escape_html_attr(text),
		Some(AttributeValue::List(items)) => escape_html_attr(&items.join(" ")),
		_ => String::new(),
	}
}
