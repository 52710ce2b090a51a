//! Message catalog for storing translations

use crate::error::{I18nError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// A message catalog containing translations for a specific locale
///
/// Catalogs map message keys to text. Text may contain positional
/// parameters `$1`, `$2`, ... that the [`Localizer`](crate::Localizer)
/// substitutes.
///
/// # Example
/// ```
/// use reinhardt_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("table-pager-items-per-page-current", "$1 lignes");
///
/// assert_eq!(
///     catalog.get("table-pager-items-per-page-current"),
///     Some(&"$1 lignes".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Parses a catalog from a JSON object of `key: text` pairs
	///
	/// Keys starting with `@` (such as `@metadata`) are ignored.
	///
	/// # Example
	/// ```
	/// use reinhardt_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_json_str(
	///     "de",
	///     r#"{"@metadata": {"authors": []}, "table-pager-button-next-page": "Nächste Seite"}"#,
	/// ).unwrap();
	///
	/// assert_eq!(catalog.len(), 1);
	/// ```
	pub fn from_json_str(locale: &str, source: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(source)?;
		let Value::Object(entries) = value else {
			return Err(I18nError::InvalidMessage {
				key: String::new(),
				reason: "catalog must be a JSON object".to_string(),
			});
		};

		let mut catalog = Self::new(locale);
		for (key, text) in entries {
			if key.starts_with('@') {
				continue;
			}
			match text {
				Value::String(text) => catalog.add_translation(key, text),
				other => {
					return Err(I18nError::InvalidMessage {
						key,
						reason: format!("expected a string, got {}", other),
					});
				}
			}
		}
		Ok(catalog)
	}

	/// Loads a catalog from a JSON file
	pub fn from_json_file(locale: &str, path: impl AsRef<Path>) -> Result<Self> {
		let source = std::fs::read_to_string(path)?;
		Self::from_json_str(locale, &source)
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation, replacing any existing text for `message`
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Copies every translation from `other` into this catalog
	pub fn merge(&mut self, other: &MessageCatalog) {
		self.messages
			.extend(other.messages.iter().map(|(k, v)| (k.clone(), v.clone())));
	}

	/// Number of translations
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Returns true if the catalog holds no translations
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}
