//! Sort resolution and row ordering
//!
//! A [`SortSpec`] is resolved from the request on every render. Unknown or
//! unsortable columns fall back to the configured default column; missing
//! or contradictory direction flags fall back to ascending.

use crate::column::Column;
use crate::request::{PARAM_ASC, PARAM_DESC, PARAM_SORT, RequestValues};
use crate::row::{CellValue, Row};
use reinhardt_pagination::SortDirection;
use serde::{Deserialize, Serialize};

/// The column rows are ordered by, and the direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
	/// Column id
	pub column: String,
	/// Direction
	pub direction: SortDirection,
}

impl SortSpec {
	/// Creates a sort spec
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: column.into(),
			direction,
		}
	}

	/// Resolves a requested column against the table's columns
	///
	/// Falls back to `default_column` when `requested` is absent, unknown or
	/// not sortable.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::SortDirection;
	/// use reinhardt_tables::{Column, SortSpec};
	///
	/// let columns = vec![
	///     Column::new("title", "Title").sortable(true),
	///     Column::new("notes", "Notes"),
	/// ];
	///
	/// let spec = SortSpec::resolve(&columns, Some("notes"), SortDirection::Descending, "title");
	/// assert_eq!(spec, SortSpec::new("title", SortDirection::Descending));
	/// ```
	pub fn resolve(
		columns: &[Column],
		requested: Option<&str>,
		direction: SortDirection,
		default_column: &str,
	) -> Self {
		let column = match requested {
			Some(id) if columns.iter().any(|c| c.id() == id && c.is_sortable()) => id,
			Some(id) => {
				tracing::debug!(requested = id, fallback = default_column, "unsortable sort column");
				default_column
			}
			None => default_column,
		};
		Self::new(column, direction)
	}

	/// Resolves the sort spec from the `sort`, `asc` and `desc` query values
	pub fn from_request<R: RequestValues + ?Sized>(
		columns: &[Column],
		request: &R,
		default_column: &str,
	) -> Self {
		let direction =
			SortDirection::from_flags(request.get_value(PARAM_ASC), request.get_value(PARAM_DESC));
		Self::resolve(columns, request.get_value(PARAM_SORT), direction, default_column)
	}

	/// Returns true if this spec sorts by `column`
	pub fn is_active(&self, column: &str) -> bool {
		self.column == column
	}

	/// Returns the spec a sort link for `column` should request
	///
	/// The active column flips its direction; any other column starts
	/// ascending.
	pub fn target_for(&self, column: &str) -> SortSpec {
		if self.is_active(column) {
			SortSpec::new(column, self.direction.toggle())
		} else {
			SortSpec::new(column, SortDirection::Ascending)
		}
	}
}

/// Returns references to `rows` ordered by `spec`
///
/// The sort is stable: rows with equal values keep their input order.
/// Rows without a cell for the sort column order as null.
pub fn sort_rows<'a>(rows: &'a [Row], spec: &SortSpec) -> Vec<&'a Row> {
	let mut sorted: Vec<&Row> = rows.iter().collect();
	sorted.sort_by(|a, b| {
		let a = a.get(&spec.column).unwrap_or(&CellValue::Null);
		let b = b.get(&spec.column).unwrap_or(&CellValue::Null);
		spec.direction.apply(a.compare(b))
	});
	sorted
}
