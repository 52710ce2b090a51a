//! A computed page of results

use crate::direction::SortDirection;

/// A bounded slice of a sorted collection plus navigation metadata
///
/// Offsets are encoded cursor tokens ready to be submitted as the `offset`
/// request value. A `None` offset means the corresponding navigation is not
/// available.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	/// Rows in this page, in traversal order
	pub rows: Vec<T>,
	/// Canonical token of the cursor this page was computed from
	pub current_offset: Option<String>,
	/// Token for the first page (never computed)
	pub first_offset: Option<String>,
	/// Token for the previous page
	pub prev_offset: Option<String>,
	/// Token for the next page
	pub next_offset: Option<String>,
	/// Token for the last page
	pub last_offset: Option<String>,
	/// 1-based ordinal of the first row of this page
	pub start_ordinal: usize,
	/// 1-based ordinal of the last row of this page
	///
	/// Smaller than `start_ordinal` when there is nothing to show.
	pub end_ordinal: usize,
	/// Number of rows in the whole collection
	pub total_results: usize,
	/// Page size this page was computed with
	pub limit: usize,
	/// Traversal direction
	pub direction: SortDirection,
}

impl<T> Page<T> {
	/// Returns the number of rows in this page
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns true if this page has no rows
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns true when the ordinals signal "no results"
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::{CursorPaginator, OpaqueCursorCodec, SortDirection};
	///
	/// let paginator = CursorPaginator::new(OpaqueCursorCodec::new());
	/// let request = paginator.request(None, None, SortDirection::Ascending);
	/// let rows: Vec<String> = Vec::new();
	/// let page = paginator.paginate(&rows, |r| Ok(r.clone()), &request).unwrap();
	///
	/// assert!(page.is_pending());
	/// assert_eq!((page.start_ordinal, page.end_ordinal), (1, 0));
	/// ```
	pub fn is_pending(&self) -> bool {
		self.end_ordinal < self.start_ordinal
	}

	/// Returns the total number of pages at this page size
	pub fn total_pages(&self) -> usize {
		if self.limit == 0 {
			0
		} else {
			self.total_results.div_ceil(self.limit)
		}
	}

	/// Returns true if a next page token is available
	pub fn has_next(&self) -> bool {
		self.next_offset.is_some()
	}

	/// Returns true if a previous page token is available
	pub fn has_previous(&self) -> bool {
		self.prev_offset.is_some()
	}

	/// Maps the rows of this page, keeping the navigation metadata
	pub fn map<U, F>(self, f: F) -> Page<U>
	where
		F: FnMut(T) -> U,
	{
		Page {
			rows: self.rows.into_iter().map(f).collect(),
			current_offset: self.current_offset,
			first_offset: self.first_offset,
			prev_offset: self.prev_offset,
			next_offset: self.next_offset,
			last_offset: self.last_offset,
			start_ordinal: self.start_ordinal,
			end_ordinal: self.end_ordinal,
			total_results: self.total_results,
			limit: self.limit,
			direction: self.direction,
		}
	}
}
