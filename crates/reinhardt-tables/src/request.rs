//! Read-only access to request query values
//!
//! Everything that depends on the current request receives a
//! [`RequestValues`] explicitly. [`QueryParams`] parses a raw query string;
//! host applications can also adapt their own request types by implementing
//! the trait, or pass a `HashMap`/`IndexMap` directly.

use indexmap::IndexMap;
use std::collections::HashMap;

/// Query parameter carrying the sort column id
pub const PARAM_SORT: &str = "sort";
/// Query parameter flagging ascending order
pub const PARAM_ASC: &str = "asc";
/// Query parameter flagging descending order
pub const PARAM_DESC: &str = "desc";
/// Query parameter carrying the cursor token
pub const PARAM_OFFSET: &str = "offset";
/// Query parameter carrying the page size
pub const PARAM_LIMIT: &str = "limit";

/// Named string values of the current request
pub trait RequestValues {
	/// Returns the value of `name`, if present
	fn get_value(&self, name: &str) -> Option<&str>;

	/// Returns the value of `name`, or `default` when absent
	fn get_value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
		self.get_value(name).unwrap_or(default)
	}

	/// Returns the values of the present `names`, in the order requested
	///
	/// Absent names are skipped.
	fn get_values(&self, names: &[&str]) -> IndexMap<String, String> {
		names
			.iter()
			.filter_map(|name| {
				self.get_value(name)
					.map(|value| (name.to_string(), value.to_string()))
			})
			.collect()
	}
}

impl<T: RequestValues + ?Sized> RequestValues for &T {
	fn get_value(&self, name: &str) -> Option<&str> {
		(**self).get_value(name)
	}
}

impl RequestValues for HashMap<String, String> {
	fn get_value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl RequestValues for IndexMap<String, String> {
	fn get_value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

/// Ordered query parameters
///
/// When a name repeats, the last value wins and the first position is kept.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::{QueryParams, RequestValues};
///
/// let query = QueryParams::parse("?sort=title&desc=1&limit=10");
///
/// assert_eq!(query.get_value("sort"), Some("title"));
/// assert_eq!(query.get_value_or("offset", "-"), "-");
/// assert_eq!(query.to_query_string(), "sort=title&desc=1&limit=10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: IndexMap<String, String>,
}

impl QueryParams {
	/// Creates an empty parameter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a URL query string, with or without the leading `?`
	///
	/// Malformed input yields an empty set.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
			Ok(pairs) => pairs.into_iter().collect(),
			Err(e) => {
				tracing::debug!(error = %e, "ignoring malformed query string");
				Self::new()
			}
		}
	}

	/// Copies the present `names` out of any request
	pub fn snapshot<R: RequestValues + ?Sized>(request: &R, names: &[&str]) -> Self {
		Self {
			params: request.get_values(names),
		}
	}

	/// Sets a value, builder style
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets a value, keeping the position of an existing name
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.params.insert(name.into(), value.into());
	}

	/// Iterates over name/value pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of parameters
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns true if there are no parameters
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	/// Encodes the parameters as `application/x-www-form-urlencoded`
	pub fn to_query_string(&self) -> String {
		let pairs: Vec<(&str, &str)> = self.iter().collect();
		// string pairs always encode
		serde_urlencoded::to_string(pairs).unwrap_or_default()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (name, value) in iter {
			params.insert(name, value);
		}
		params
	}
}

impl RequestValues for QueryParams {
	fn get_value(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("sort=title&asc=1", &[("sort", "title"), ("asc", "1")])]
	#[case("?limit=10", &[("limit", "10")])]
	#[case("", &[])]
	#[case("q=a%20b&x=%26", &[("q", "a b"), ("x", "&")])]
	#[case("sort=a&limit=5&sort=b", &[("sort", "b"), ("limit", "5")])]
	fn test_parse(#[case] query: &str, #[case] expected: &[(&str, &str)]) {
		// Act
		let params = QueryParams::parse(query);

		// Assert
		let pairs: Vec<(&str, &str)> = params.iter().collect();
		assert_eq!(pairs, expected);
	}

	#[rstest]
	fn test_get_values_skips_absent_names() {
		// Arrange
		let params = QueryParams::parse("limit=10&sort=title");

		// Act
		let values = params.get_values(&[PARAM_SORT, PARAM_ASC, PARAM_DESC, PARAM_OFFSET, PARAM_LIMIT]);

		// Assert
		let pairs: Vec<(&str, &str)> = values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
		assert_eq!(pairs, vec![("sort", "title"), ("limit", "10")]);
	}

	#[rstest]
	fn test_hash_map_adapter() {
		// Arrange
		let mut map = HashMap::new();
		map.insert("offset".to_string(), "20240101120000".to_string());

		// Act & Assert
		assert_eq!(map.get_value(PARAM_OFFSET), Some("20240101120000"));
		assert_eq!(map.get_value_or(PARAM_LIMIT, "5"), "5");
	}

	#[rstest]
	fn test_snapshot_from_borrowed_request() {
		// Arrange
		let params = QueryParams::parse("sort=title&page=3&limit=25");

		// Act
		let snapshot = QueryParams::snapshot(&&params, &[PARAM_SORT, PARAM_LIMIT]);

		// Assert
		assert_eq!(snapshot.to_query_string(), "sort=title&limit=25");
	}

	#[rstest]
	fn test_query_string_encoding() {
		let params = QueryParams::new().with("sort", "a b").with("offset", "x&y=z");
		assert_eq!(params.to_query_string(), "sort=a+b&offset=x%26y%3Dz");
	}
}
