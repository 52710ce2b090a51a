//! Table model
//!
//! A [`Table`] is the render-ready state of one table for one request: its
//! columns, the rows of the current page, the resolved sort, the query
//! values sort links must preserve and an optional pager. Tables are built
//! through [`TableBuilder`], which rejects inconsistent configurations.

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::pager::{Pager, PagerPosition};
use crate::request::QueryParams;
use crate::row::Row;
use crate::sorting::SortSpec;
use reinhardt_template::{AttributeValue, Attributes};
use std::collections::HashSet;

/// A table ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
	id: String,
	caption: String,
	hide_caption: bool,
	header_content: Option<String>,
	footer: Option<String>,
	show_vertical_borders: bool,
	attributes: Attributes,
	columns: Vec<Column>,
	rows: Vec<Row>,
	sort: Option<SortSpec>,
	query: QueryParams,
	pager: Option<Pager>,
	pager_position: PagerPosition,
}

impl Table {
	/// Starts building a table with the given columns
	pub fn builder(columns: Vec<Column>) -> TableBuilder {
		TableBuilder::new(columns)
	}

	/// Returns the element id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the caption
	pub fn caption(&self) -> &str {
		&self.caption
	}

	/// Returns true if the caption is only exposed to assistive technology
	pub fn hide_caption(&self) -> bool {
		self.hide_caption
	}

	/// Returns the content shown next to the caption
	pub fn header_content(&self) -> Option<&str> {
		self.header_content.as_deref()
	}

	/// Returns the footer text
	pub fn footer(&self) -> Option<&str> {
		self.footer.as_deref()
	}

	/// Returns true if borders are drawn between columns
	pub fn show_vertical_borders(&self) -> bool {
		self.show_vertical_borders
	}

	/// Returns the extra HTML attributes
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the columns in display order
	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	/// Returns the rows of the current page
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns the resolved sort, if the table is sorted
	pub fn sort(&self) -> Option<&SortSpec> {
		self.sort.as_ref()
	}

	/// Returns the query values sort links preserve
	pub fn query(&self) -> &QueryParams {
		&self.query
	}

	/// Returns the pager
	pub fn pager(&self) -> Option<&Pager> {
		self.pager.as_ref()
	}

	/// Returns where the pager is shown
	pub fn pager_position(&self) -> PagerPosition {
		self.pager_position
	}
}

/// Builder for [`Table`]
///
/// # Example
///
/// ```rust
/// use reinhardt_pagination::SortDirection;
/// use reinhardt_tables::{Column, Row, SortSpec, Table};
///
/// let table = Table::builder(vec![
///     Column::new("title", "Title").sortable(true),
///     Column::new("diameter_km", "Diameter (km)"),
/// ])
/// .id("planets")
/// .caption("Planets")
/// .rows(vec![Row::new().with("title", "Mars").with("diameter_km", 6779)])
/// .sort(SortSpec::new("title", SortDirection::Ascending))
/// .build()
/// .unwrap();
///
/// assert_eq!(table.columns().len(), 2);
/// assert_eq!(table.rows().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
	table: Table,
}

impl TableBuilder {
	/// Creates a builder with the given columns
	pub fn new(columns: Vec<Column>) -> Self {
		Self {
			table: Table {
				id: String::new(),
				caption: String::new(),
				hide_caption: false,
				header_content: None,
				footer: None,
				show_vertical_borders: false,
				attributes: Attributes::new(),
				columns,
				rows: Vec::new(),
				sort: None,
				query: QueryParams::new(),
				pager: None,
				pager_position: PagerPosition::default(),
			},
		}
	}

	/// Sets the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.table.id = id.into();
		self
	}

	/// Sets the caption
	pub fn caption(mut self, caption: impl Into<String>) -> Self {
		self.table.caption = caption.into();
		self
	}

	/// Hides the caption visually
	pub fn hide_caption(mut self, hide: bool) -> Self {
		self.table.hide_caption = hide;
		self
	}

	/// Sets the content shown next to the caption
	pub fn header_content(mut self, content: impl Into<String>) -> Self {
		self.table.header_content = Some(content.into());
		self
	}

	/// Sets the footer text
	pub fn footer(mut self, footer: impl Into<String>) -> Self {
		self.table.footer = Some(footer.into());
		self
	}

	/// Sets whether borders are drawn between columns
	pub fn show_vertical_borders(mut self, show: bool) -> Self {
		self.table.show_vertical_borders = show;
		self
	}

	/// Sets an HTML attribute on the table wrapper
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.table.attributes.insert(name.into(), value.into());
		self
	}

	/// Replaces all HTML attributes
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.table.attributes = attributes;
		self
	}

	/// Sets the rows of the current page
	pub fn rows(mut self, rows: Vec<Row>) -> Self {
		self.table.rows = rows;
		self
	}

	/// Sets the resolved sort
	pub fn sort(mut self, sort: SortSpec) -> Self {
		self.table.sort = Some(sort);
		self
	}

	/// Sets the query values sort links preserve
	pub fn query(mut self, query: QueryParams) -> Self {
		self.table.query = query;
		self
	}

	/// Attaches a pager
	pub fn pager(mut self, pager: Pager) -> Self {
		self.table.pager = Some(pager);
		self
	}

	/// Sets where the pager is shown
	pub fn pager_position(mut self, position: PagerPosition) -> Self {
		self.table.pager_position = position;
		self
	}

	/// Validates and returns the table
	///
	/// # Errors
	///
	/// - [`TableError::DuplicateColumn`] if two columns share an id
	/// - [`TableError::UnknownColumn`] if the sort column does not exist
	/// - [`TableError::UnsortableColumn`] if the sort column is not sortable
	pub fn build(self) -> Result<Table> {
		validate_columns(&self.table.columns)?;

		if let Some(sort) = &self.table.sort {
			validate_sort_column(&self.table.columns, &sort.column)?;
		}

		let mut table = self.table;
		if let Some(pager) = table.pager.take() {
			table.pager = Some(pager.with_position(table.pager_position));
		}
		Ok(table)
	}
}

/// Checks that column ids are unique
pub(crate) fn validate_columns(columns: &[Column]) -> Result<()> {
	let mut seen = HashSet::new();
	for column in columns {
		if !seen.insert(column.id()) {
			return Err(TableError::DuplicateColumn(column.id().to_string()));
		}
	}
	Ok(())
}

/// Checks that `id` names an existing, sortable column
pub(crate) fn validate_sort_column(columns: &[Column], id: &str) -> Result<()> {
	match columns.iter().find(|c| c.id() == id) {
		None => Err(TableError::UnknownColumn(id.to_string())),
		Some(column) if !column.is_sortable() => Err(TableError::UnsortableColumn(id.to_string())),
		Some(_) => Ok(()),
	}
}
