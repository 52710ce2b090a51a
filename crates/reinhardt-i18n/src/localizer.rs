//! Message lookup with positional parameters

use crate::catalog::MessageCatalog;
use crate::messages;

/// Looks up localized text by key
pub trait Localizer: Send + Sync {
	/// Returns the text for `key` with `$1`, `$2`, ... replaced by `params`
	///
	/// Unknown keys yield the key itself, so a missing translation is
	/// visible but never fatal.
	fn msg(&self, key: &str, params: &[String]) -> String;
}

/// [`Localizer`] backed by a [`MessageCatalog`], falling back to English
///
/// # Example
/// ```
/// use reinhardt_i18n::{CatalogLocalizer, Localizer, MessageCatalog};
///
/// let english = CatalogLocalizer::english();
/// assert_eq!(
///     english.msg("table-pager-items-current", &["1".into(), "5".into(), "30".into()]),
///     "Showing results 1–5 of 30"
/// );
///
/// let mut french = MessageCatalog::new("fr");
/// french.add_translation("table-pager-items-per-page-current", "$1 lignes");
/// let localizer = CatalogLocalizer::new(french);
/// assert_eq!(localizer.msg("table-pager-items-per-page-current", &["10".into()]), "10 lignes");
/// assert_eq!(localizer.msg("table-pager-button-next-page", &[]), "Next page");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLocalizer {
	catalog: MessageCatalog,
}

impl CatalogLocalizer {
	/// Creates a localizer whose catalog overrides the English defaults
	pub fn new(catalog: MessageCatalog) -> Self {
		let mut localized = MessageCatalog::new(catalog.locale());
		localized.merge(messages::english());
		localized.merge(&catalog);
		Self { catalog: localized }
	}

	/// Creates a localizer with only the English defaults
	pub fn english() -> Self {
		Self {
			catalog: messages::english().clone(),
		}
	}

	/// Returns the locale of the underlying catalog
	pub fn locale(&self) -> &str {
		self.catalog.locale()
	}
}

impl Default for CatalogLocalizer {
	fn default() -> Self {
		Self::english()
	}
}

impl Localizer for CatalogLocalizer {
	fn msg(&self, key: &str, params: &[String]) -> String {
		match self.catalog.get(key) {
			Some(text) => substitute(text, params),
			None => {
				tracing::debug!(key, locale = self.catalog.locale(), "missing message");
				key.to_string()
			}
		}
	}
}

/// Replaces `$N` (1-based) with the matching parameter
///
/// References without a parameter are left untouched.
pub fn substitute(text: &str, params: &[String]) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(pos) = rest.find('$') {
		out.push_str(&rest[..pos]);
		let after = &rest[pos + 1..];
		let digits = after.bytes().take_while(u8::is_ascii_digit).count();
		let param = after[..digits]
			.parse::<usize>()
			.ok()
			.and_then(|n| n.checked_sub(1))
			.and_then(|index| params.get(index));

		match param {
			Some(value) => {
				out.push_str(value);
				rest = &after[digits..];
			}
			None => {
				out.push('$');
				rest = after;
			}
		}
	}
	out.push_str(rest);
	out
}
