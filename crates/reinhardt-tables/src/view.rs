//! End-to-end table pipeline
//!
//! [`TableView`] turns a full row collection and the current request into
//! a [`Table`] ready for rendering. Each call is a pure function of its
//! inputs; nothing is carried between requests.
//!
//! ```mermaid
//! graph TD
//!     A[RequestValues] --> B[limit]
//!     A --> C[offset]
//!     A --> D[SortSpec]
//!     E[Rows] --> F[sort_rows]
//!     D --> F
//!     F --> G[CursorPaginator]
//!     B --> G
//!     C --> G
//!     G --> H[Page]
//!     H --> I[Pager]
//!     H --> J[TableBuilder]
//!     I --> J
//! ```

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::pager::Pager;
use crate::request::{
	PARAM_ASC, PARAM_DESC, PARAM_LIMIT, PARAM_OFFSET, PARAM_SORT, QueryParams, RequestValues,
};
use crate::row::Row;
use crate::settings::TableSettings;
use crate::sorting::{SortSpec, sort_rows};
use crate::table::{Table, TableBuilder, validate_columns, validate_sort_column};
use reinhardt_pagination::{CursorCodec, CursorPaginator, Page};

/// Sortable, cursor-paginated view over an in-memory row collection
///
/// # Example
///
/// ```rust
/// use reinhardt_pagination::TimestampCursorCodec;
/// use reinhardt_tables::{Column, QueryParams, Row, TableView};
///
/// let rows = vec![
///     Row::new().with("title", "Mercury").with("creation_date", "2024-01-01 12:00:00"),
///     Row::new().with("title", "Venus").with("creation_date", "2024-01-05 14:30:00"),
///     Row::new().with("title", "Earth").with("creation_date", "2024-01-10 10:00:00"),
/// ];
/// let view = TableView::new(
///     vec![
///         Column::new("title", "Title").sortable(true),
///         Column::new("creation_date", "Created").sortable(true),
///     ],
///     TimestampCursorCodec::new(),
/// )
/// .with_default_sort("creation_date")
/// .with_cursor_field("creation_date");
///
/// let table = view.table(&rows, &QueryParams::parse("desc=1")).unwrap();
///
/// assert_eq!(table.rows()[0].get("title").unwrap().to_string(), "Earth");
/// assert_eq!(table.pager().unwrap().start_ordinal(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TableView<C> {
	columns: Vec<Column>,
	default_sort: String,
	cursor_field: String,
	settings: TableSettings,
	codec: C,
}

impl<C: CursorCodec> TableView<C> {
	/// Creates a view with the given columns and cursor codec
	///
	/// The default sort column and the cursor field start as the first
	/// column's id.
	pub fn new(columns: Vec<Column>, codec: C) -> Self {
		let first = columns.first().map(|c| c.id().to_string()).unwrap_or_default();
		Self {
			default_sort: first.clone(),
			cursor_field: first,
			columns,
			settings: TableSettings::default(),
			codec,
		}
	}

	/// Sets the column used when the request names no valid sort column
	pub fn with_default_sort(mut self, column: impl Into<String>) -> Self {
		self.default_sort = column.into();
		self
	}

	/// Sets the row field cursors are derived from
	pub fn with_cursor_field(mut self, field: impl Into<String>) -> Self {
		self.cursor_field = field.into();
		self
	}

	/// Replaces the settings
	pub fn with_settings(mut self, settings: TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Returns the columns
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Returns the settings
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Computes the current page and returns a builder for further chrome
	///
	/// # Errors
	///
	/// Fails on configuration errors (duplicate columns, an invalid default
	/// sort column, invalid page sizes), when a row lacks the cursor field,
	/// or when the codec cannot parse a cursor field value. Request values
	/// never cause an error.
	pub fn builder<R: RequestValues + ?Sized>(&self, rows: &[Row], request: &R) -> Result<TableBuilder> {
		validate_columns(&self.columns)?;
		validate_sort_column(&self.columns, &self.default_sort)?;
		let page_sizes = self.settings.page_size_options()?;

		if let Some(index) = rows.iter().position(|row| !row.contains(&self.cursor_field)) {
			return Err(TableError::MissingCursorField {
				index,
				field: self.cursor_field.clone(),
			});
		}

		let sort = SortSpec::from_request(&self.columns, request, &self.default_sort);
		let paginator = CursorPaginator::new(&self.codec).page_sizes(page_sizes.clone());
		let page_request = paginator.request(
			request.get_value(PARAM_OFFSET),
			request.get_value(PARAM_LIMIT),
			sort.direction,
		);

		let sorted = sort_rows(rows, &sort);
		let page: Page<&Row> = paginator.paginate(&sorted, |row| self.cursor_key(row), &page_request)?;

		tracing::debug!(
			sort = %sort.column,
			direction = sort.direction.as_str(),
			limit = page.limit,
			start = page.start_ordinal,
			end = page.end_ordinal,
			total = page.total_results,
			"table page resolved"
		);

		let mut form_fields = vec![PARAM_SORT, PARAM_ASC, PARAM_DESC];
		form_fields.extend(self.passthrough());
		let pager = Pager::new(page_sizes)
			.with_page(&page)
			.with_hidden_fields(request.get_values(&form_fields));

		let mut link_fields = vec![PARAM_SORT, PARAM_ASC, PARAM_DESC, PARAM_OFFSET, PARAM_LIMIT];
		link_fields.extend(self.passthrough());

		Ok(Table::builder(self.columns.clone())
			.rows(page.rows.into_iter().cloned().collect())
			.sort(sort)
			.query(QueryParams::snapshot(request, &link_fields))
			.pager(pager)
			.pager_position(self.settings.pager_position)
			.show_vertical_borders(self.settings.show_vertical_borders))
	}

	/// Computes the current page and builds the table
	pub fn table<R: RequestValues + ?Sized>(&self, rows: &[Row], request: &R) -> Result<Table> {
		self.builder(rows, request)?.build()
	}

	fn cursor_key(&self, row: &Row) -> reinhardt_pagination::Result<C::Key> {
		let value = row
			.get(&self.cursor_field)
			.map(ToString::to_string)
			.unwrap_or_default();
		self.codec.parse_field(&value)
	}

	fn passthrough(&self) -> impl Iterator<Item = &str> {
		self.settings.passthrough_params.iter().map(String::as_str)
	}
}
