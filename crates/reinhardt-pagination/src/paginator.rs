//! Cursor paginator over in-memory, pre-sorted collections
//!
//! The paginator never sorts: callers hand it rows in display order and a
//! key per row. Cursors are resolved to a position in that order, so the
//! display order need not follow the cursor key. Every page is derived from
//! the request alone, so the same request always yields the same page.

use crate::cursor::{Cursor, CursorCodec};
use crate::direction::SortDirection;
use crate::error::{PaginationError, Result};
use crate::page::Page;
use crate::page_size::PageSizeOptions;

/// Normalized pagination input for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<K> {
	/// Position to resume from; `None` starts at the beginning
	pub cursor: Option<Cursor<K>>,
	/// Traversal direction
	pub direction: SortDirection,
	/// Maximum number of rows on the page
	pub limit: usize,
}

impl<K> PageRequest<K> {
	/// Creates a request for the first page, ascending
	pub fn new(limit: usize) -> Self {
		Self {
			cursor: None,
			direction: SortDirection::Ascending,
			limit,
		}
	}

	/// Sets the cursor
	pub fn cursor(mut self, cursor: Cursor<K>) -> Self {
		self.cursor = Some(cursor);
		self
	}

	/// Sets the traversal direction
	pub fn direction(mut self, direction: SortDirection) -> Self {
		self.direction = direction;
		self
	}
}

/// Cursor-based paginator
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::{
///     Cursor, CursorCodec, CursorPaginator, OpaqueCursorCodec, PageRequest, SortDirection,
/// };
///
/// let rows: Vec<u32> = (1..=12).collect();
/// let paginator = CursorPaginator::new(OpaqueCursorCodec::new());
/// let key = |n: &u32| Ok(format!("{:03}", n));
///
/// let request = PageRequest::new(5).cursor(Cursor::After("005".to_string()));
/// let page = paginator.paginate(&rows, key, &request).unwrap();
///
/// assert_eq!(page.rows, vec![6, 7, 8, 9, 10]);
/// assert_eq!(page.start_ordinal, 6);
/// assert_eq!(page.prev_offset.as_deref(), Some("-"));
/// let next = paginator.codec().try_decode(page.next_offset.as_deref().unwrap()).unwrap();
/// assert_eq!(next, Cursor::After("010".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct CursorPaginator<C> {
	codec: C,
	page_sizes: PageSizeOptions,
}

impl<C: CursorCodec> CursorPaginator<C> {
	/// Creates a paginator with the default page size allow-list
	pub fn new(codec: C) -> Self {
		Self {
			codec,
			page_sizes: PageSizeOptions::default(),
		}
	}

	/// Replaces the page size allow-list
	pub fn page_sizes(mut self, page_sizes: PageSizeOptions) -> Self {
		self.page_sizes = page_sizes;
		self
	}

	/// Returns the cursor codec
	pub fn codec(&self) -> &C {
		&self.codec
	}

	/// Returns the page size allow-list
	pub fn page_size_options(&self) -> &PageSizeOptions {
		&self.page_sizes
	}

	/// Builds a request from raw `offset` and `limit` values
	///
	/// Malformed cursors are treated as absent and unknown page sizes fall
	/// back to the default. This never fails.
	pub fn request(
		&self,
		offset: Option<&str>,
		limit: Option<&str>,
		direction: SortDirection,
	) -> PageRequest<C::Key> {
		PageRequest {
			cursor: self.codec.decode(offset),
			direction,
			limit: self.page_sizes.resolve(limit),
		}
	}

	/// Computes the page described by `request`
	///
	/// `rows` are taken in display order. A cursor is located by position:
	/// the page starts right after the last row whose key equals the cursor
	/// key, so rows may be ordered by any column as long as cursor keys are
	/// unique. When no row carries the cursor key, the rows are assumed to be
	/// ordered by the key in the request's direction and the page starts at
	/// the first row strictly after it. A `key_of` failure aborts pagination.
	///
	/// # Errors
	///
	/// Returns [`PaginationError::InvalidPageSize`] when the request limit is
	/// zero, or whatever error `key_of` reports.
	pub fn paginate<T, F>(
		&self,
		rows: &[T],
		key_of: F,
		request: &PageRequest<C::Key>,
	) -> Result<Page<T>>
	where
		T: Clone,
		F: Fn(&T) -> Result<C::Key>,
	{
		let limit = request.limit;
		if limit == 0 {
			return Err(PaginationError::InvalidPageSize(0));
		}

		let keys = rows.iter().map(&key_of).collect::<Result<Vec<_>>>()?;
		let total = keys.len();
		let direction = request.direction;
		let anchor = request.cursor.as_ref().and_then(Cursor::key);
		let start = anchor.map_or(0, |a| locate(&keys, a, direction));
		let end = start.saturating_add(limit).min(total);

		let next_offset = if end - start == limit {
			Some(self.codec.encode_key(&keys[end - 1]))
		} else {
			None
		};

		let prev_offset = previous_cursor(&keys, start, limit).map(|cursor| self.codec.encode(&cursor));

		let last_offset = (total > limit).then(|| self.codec.encode_key(&keys[total - limit - 1]));

		let start_ordinal = start + 1;
		let end_ordinal = end;

		tracing::trace!(
			total,
			limit,
			direction = direction.as_str(),
			start_ordinal,
			end_ordinal,
			"computed page"
		);

		Ok(Page {
			rows: rows[start..end].to_vec(),
			current_offset: request.cursor.as_ref().map(|c| self.codec.encode(c)),
			first_offset: None,
			prev_offset,
			next_offset,
			last_offset,
			start_ordinal,
			end_ordinal,
			total_results: total,
			limit,
			direction,
		})
	}
}

/// Index of the first row after `anchor`
fn locate<K: Ord>(keys: &[K], anchor: &K, direction: SortDirection) -> usize {
	match keys.iter().rposition(|key| key == anchor) {
		Some(index) => index + 1,
		None => keys
			.iter()
			.position(|key| direction.is_after(key, anchor))
			.unwrap_or(keys.len()),
	}
}

/// Finds the cursor that addresses the page ending right before `start`
///
/// The window is the last `limit` rows before `start`. When it begins at
/// the first row of the collection the explicit beginning cursor is
/// returned, since no row key can address "before the first row".
fn previous_cursor<K: Clone>(keys: &[K], start: usize, limit: usize) -> Option<Cursor<K>> {
	if start == 0 {
		return None;
	}
	match start.saturating_sub(limit) {
		0 => Some(Cursor::Beginning),
		first => Some(Cursor::After(keys[first - 1].clone())),
	}
}
