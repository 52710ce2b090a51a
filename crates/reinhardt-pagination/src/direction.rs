//! Sort and traversal direction

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
///
/// The same value governs both the global ordering of a collection and the
/// direction in which a cursor is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Resolves a direction from the `asc`/`desc` request flags
	///
	/// Descending is chosen only when `desc` is set and `asc` is not.
	/// Anything else, including both flags absent, is ascending.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::SortDirection;
	///
	/// assert_eq!(SortDirection::from_flags(None, Some("1")), SortDirection::Descending);
	/// assert_eq!(SortDirection::from_flags(Some("1"), Some("")), SortDirection::Ascending);
	/// assert_eq!(SortDirection::from_flags(None, None), SortDirection::Ascending);
	/// ```
	pub fn from_flags(asc: Option<&str>, desc: Option<&str>) -> Self {
		if is_flag_set(desc) && !is_flag_set(asc) {
			Self::Descending
		} else {
			Self::Ascending
		}
	}

	/// Returns the short name used in CSS classes and logs
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Applies this direction to an ascending comparison result
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}

	/// Returns true if `key` lies strictly after `anchor` when traversing in
	/// this direction
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::SortDirection;
	///
	/// assert!(SortDirection::Ascending.is_after(&5, &3));
	/// assert!(SortDirection::Descending.is_after(&3, &5));
	/// assert!(!SortDirection::Ascending.is_after(&3, &3));
	/// ```
	pub fn is_after<K: Ord + ?Sized>(&self, key: &K, anchor: &K) -> bool {
		self.apply(key.cmp(anchor)) == Ordering::Greater
	}

	/// Returns true if `key` lies strictly before `anchor` when traversing in
	/// this direction
	pub fn is_before<K: Ord + ?Sized>(&self, key: &K, anchor: &K) -> bool {
		self.apply(key.cmp(anchor)) == Ordering::Less
	}
}

fn is_flag_set(value: Option<&str>) -> bool {
	match value.map(str::trim) {
		None | Some("") => false,
		Some(v) => !v.eq_ignore_ascii_case("0") && !v.eq_ignore_ascii_case("false"),
	}
}
