//! Allow-listed page sizes

use crate::error::{PaginationError, Result};

/// Page sizes offered when none are configured
pub const DEFAULT_PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size used when the requested one is missing or not allowed
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// The set of page sizes a table accepts
///
/// Requested sizes outside the allow-list are silently replaced by the
/// default; they come from user-editable URLs and must never fail a render.
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::PageSizeOptions;
///
/// let options = PageSizeOptions::default();
/// assert_eq!(options.resolve(Some("25")), 25);
/// assert_eq!(options.resolve(Some("999")), 5);
/// assert_eq!(options.resolve(Some("ten")), 5);
/// assert_eq!(options.resolve(None), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeOptions {
	sizes: Vec<usize>,
	default: usize,
}

impl PageSizeOptions {
	/// Create an allow-list
	///
	/// Fails if `sizes` is empty, contains zero, or does not contain `default`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::PageSizeOptions;
	///
	/// assert!(PageSizeOptions::new(vec![10, 20], 10).is_ok());
	/// assert!(PageSizeOptions::new(vec![10, 20], 15).is_err());
	/// assert!(PageSizeOptions::new(vec![], 10).is_err());
	/// ```
	pub fn new(sizes: Vec<usize>, default: usize) -> Result<Self> {
		if sizes.is_empty() {
			return Err(PaginationError::InvalidPageSizeOptions(
				"at least one page size is required".to_string(),
			));
		}
		if sizes.contains(&0) {
			return Err(PaginationError::InvalidPageSize(0));
		}
		if !sizes.contains(&default) {
			return Err(PaginationError::InvalidPageSizeOptions(format!(
				"default page size {} is not one of {:?}",
				default, sizes
			)));
		}
		Ok(Self { sizes, default })
	}

	/// Returns the allowed sizes in declaration order
	pub fn sizes(&self) -> &[usize] {
		&self.sizes
	}

	/// Returns the fallback size
	pub fn default_size(&self) -> usize {
		self.default
	}

	/// Returns true if `size` is allowed
	pub fn contains(&self, size: usize) -> bool {
		self.sizes.contains(&size)
	}

	/// Resolves a raw `limit` request value
	pub fn resolve(&self, requested: Option<&str>) -> usize {
		let Some(raw) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
			return self.default;
		};
		match raw.parse::<usize>() {
			Ok(size) if self.contains(size) => size,
			_ => {
				tracing::debug!(
					requested = %raw,
					fallback = self.default,
					"Page size not allowed, using default"
				);
				self.default
			}
		}
	}
}

impl Default for PageSizeOptions {
	fn default() -> Self {
		Self {
			sizes: DEFAULT_PAGE_SIZES.to_vec(),
			default: DEFAULT_PAGE_SIZE,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some("5"), 5)]
	#[case(Some("10"), 10)]
	#[case(Some(" 50 "), 50)]
	#[case(Some("100"), 100)]
	#[case(Some("999"), 5)]
	#[case(Some("0"), 5)]
	#[case(Some("-10"), 5)]
	#[case(Some("abc"), 5)]
	#[case(Some(""), 5)]
	#[case(None, 5)]
	fn test_resolve_falls_back_silently(#[case] requested: Option<&str>, #[case] expected: usize) {
		assert_eq!(PageSizeOptions::default().resolve(requested), expected);
	}

	#[rstest]
	fn test_zero_size_is_rejected() {
		assert_eq!(
			PageSizeOptions::new(vec![0, 5], 5),
			Err(PaginationError::InvalidPageSize(0))
		);
	}

	#[rstest]
	fn test_custom_default() {
		let options = PageSizeOptions::new(vec![20, 40], 40).unwrap();

		assert_eq!(options.resolve(Some("5")), 40);
		assert_eq!(options.sizes(), &[20, 40]);
	}
}
