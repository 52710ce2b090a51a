//! Table renderer
//!
//! Column data carries the sort affordances: whether the column is the
//! active sort column, which icon to show and the link that sorts by it.
//! Sort links keep every query value of the current request (offset, limit
//! and passthrough parameters) and replace only `sort`, `asc` and `desc`.

use crate::error::Result;
use crate::render::pager::PagerRenderer;
use crate::request::{PARAM_ASC, PARAM_DESC, PARAM_SORT};
use crate::sorting::SortSpec;
use crate::table::Table;
use reinhardt_i18n::{Localizer, messages};
use reinhardt_pagination::SortDirection;
use reinhardt_template::{Sanitizer, TABLE_TEMPLATE, TemplateEngine, resolve, resolve_classes};
use serde::Serialize;
use std::sync::Arc;

const SORT_ICON_ASC: &str = "ui-table__sort-icon--asc";
const SORT_ICON_DESC: &str = "ui-table__sort-icon--desc";
const SORT_ICON_UNSORTED: &str = "ui-table__sort-icon--unsorted";

/// Template data for a header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnData {
	/// Sanitized column id
	pub id: String,
	/// Sanitized label
	pub label: String,
	/// Alignment name, empty when unset
	pub align: &'static str,
	/// Whether the column can be sorted
	pub sortable: bool,
	/// Whether rows are currently sorted by this column
	pub is_current_sort: bool,
	/// `asc` or `desc` for the active column, empty otherwise
	pub sort_direction: &'static str,
	/// Sanitized link that sorts by this column; empty when unsortable
	pub sort_url: String,
	/// Sort icon CSS class
	pub sort_icon_class: &'static str,
}

/// Template data for a body cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellData {
	/// Sanitized display value
	pub value: String,
	/// Alignment name of the cell's column
	pub align: &'static str,
}

/// Template data for a body row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowData {
	/// Cells aligned positionally with the columns
	pub cells: Vec<CellData>,
}

/// Template data for a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableData {
	/// Sanitized element id
	pub id: String,
	/// Extra CSS classes
	pub classes: String,
	/// Resolved attribute string, without `class`
	pub attributes: String,
	/// Whether borders are drawn between columns
	pub show_vertical_borders: bool,
	/// Sanitized caption
	pub caption: String,
	/// Whether the caption is visually hidden
	pub hide_caption: bool,
	/// Sanitized header content
	pub header_content: String,
	/// Sanitized footer
	pub footer: String,
	/// Header cells
	pub columns: Vec<ColumnData>,
	/// Body rows
	pub rows: Vec<RowData>,
	/// Rendered pager, filled in by [`TableRenderer::render`]
	pub pager: String,
	/// Pager position name
	pub pager_position: &'static str,
	/// Whether a pager is shown above the table
	pub show_pager_top: bool,
	/// Whether a pager is shown below the table
	pub show_pager_bottom: bool,
	/// Localized text shown when there are no rows
	pub empty_message: String,
}

/// Renders [`Table`] models
#[derive(Clone)]
pub struct TableRenderer {
	sanitizer: Sanitizer,
	engine: Arc<dyn TemplateEngine>,
	localizer: Arc<dyn Localizer>,
	pager: PagerRenderer,
}

impl TableRenderer {
	/// Creates a renderer using `engine` and `localizer`
	pub fn new(engine: Arc<dyn TemplateEngine>, localizer: Arc<dyn Localizer>) -> Self {
		Self {
			sanitizer: Sanitizer::new(),
			pager: PagerRenderer::new(Arc::clone(&engine), Arc::clone(&localizer)),
			engine,
			localizer,
		}
	}

	/// Returns the renderer used for the table's pager
	pub fn pager_renderer(&self) -> &PagerRenderer {
		&self.pager
	}

	/// Builds the template data for `table`, without the pager markup
	pub fn prepare(&self, table: &Table) -> TableData {
		let attributes = self.sanitizer.sanitize_attributes(table.attributes());
		let position = table.pager_position();
		let has_pager = table.pager().is_some();

		TableData {
			id: self.sanitizer.sanitize_text(table.id()),
			classes: resolve_classes(&attributes),
			attributes: resolve(&attributes),
			show_vertical_borders: table.show_vertical_borders(),
			caption: self.sanitizer.sanitize_text(table.caption()),
			hide_caption: table.hide_caption(),
			header_content: self
				.sanitizer
				.sanitize_text(table.header_content().unwrap_or_default()),
			footer: self
				.sanitizer
				.sanitize_text(table.footer().unwrap_or_default()),
			columns: self.prepare_columns(table),
			rows: self.prepare_rows(table),
			pager: String::new(),
			pager_position: position.as_str(),
			show_pager_top: has_pager && position.shows_top(),
			show_pager_bottom: has_pager && position.shows_bottom(),
			empty_message: self
				.sanitizer
				.sanitize_text(&self.localizer.msg(messages::TABLE_EMPTY, &[])),
		}
	}

	/// Renders `table`, including its pager, to HTML
	pub fn render(&self, table: &Table) -> Result<String> {
		let mut data = self.prepare(table);
		if let Some(pager) = table.pager() {
			data.pager = self.pager.render(pager)?;
		}

		tracing::trace!(
			table = table.id(),
			columns = data.columns.len(),
			rows = data.rows.len(),
			"rendering table"
		);
		let data = serde_json::to_value(data)?;
		Ok(self.engine.render(TABLE_TEMPLATE, &data)?)
	}

	fn prepare_columns(&self, table: &Table) -> Vec<ColumnData> {
		table
			.columns()
			.iter()
			.map(|column| {
				let active = table.sort().filter(|spec| spec.is_active(column.id()));
				let sort_icon_class = match active.map(|spec| spec.direction) {
					Some(SortDirection::Ascending) => SORT_ICON_ASC,
					Some(SortDirection::Descending) => SORT_ICON_DESC,
					None => SORT_ICON_UNSORTED,
				};
				let sort_url = if column.is_sortable() {
					self.sanitizer.sanitize_text(&sort_url(table, column.id()))
				} else {
					String::new()
				};

				ColumnData {
					id: self.sanitizer.sanitize_text(column.id()),
					label: self.sanitizer.sanitize_text(column.label()),
					align: column.alignment().map(|a| a.as_str()).unwrap_or_default(),
					sortable: column.is_sortable(),
					is_current_sort: active.is_some(),
					sort_direction: active.map(|spec| spec.direction.as_str()).unwrap_or_default(),
					sort_url,
					sort_icon_class,
				}
			})
			.collect()
	}

	fn prepare_rows(&self, table: &Table) -> Vec<RowData> {
		table
			.rows()
			.iter()
			.map(|row| RowData {
				cells: table
					.columns()
					.iter()
					.map(|column| CellData {
						value: row
							.get(column.id())
							.map(|value| self.sanitizer.sanitize_text(&value.to_string()))
							.unwrap_or_default(),
						align: column.alignment().map(|a| a.as_str()).unwrap_or_default(),
					})
					.collect(),
			})
			.collect()
	}
}

impl std::fmt::Debug for TableRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableRenderer").finish_non_exhaustive()
	}
}

/// Builds the unescaped query link that sorts `table` by `column`
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::SortDirection;
/// use reinhardt_tables::render::table::sort_url;
/// use reinhardt_tables::{Column, QueryParams, SortSpec, Table};
///
/// let table = Table::builder(vec![
///     Column::new("title", "Title").sortable(true),
///     Column::new("page_id", "ID").sortable(true),
/// ])
/// .sort(SortSpec::new("title", SortDirection::Ascending))
/// .query(QueryParams::parse("sort=title&asc=1&offset=abc&limit=10"))
/// .build()
/// .unwrap();
///
/// assert_eq!(sort_url(&table, "title"), "?sort=title&asc=&offset=abc&limit=10&desc=1");
/// assert_eq!(sort_url(&table, "page_id"), "?sort=page_id&asc=1&offset=abc&limit=10&desc=");
/// ```
pub fn sort_url(table: &Table, column: &str) -> String {
	let target = match table.sort() {
		Some(spec) => spec.target_for(column),
		None => SortSpec::new(column, SortDirection::Ascending),
	};
	let ascending = target.direction == SortDirection::Ascending;

	let mut query = table.query().clone();
	query.insert(PARAM_SORT, target.column);
	query.insert(PARAM_ASC, if ascending { "1" } else { "" });
	query.insert(PARAM_DESC, if ascending { "" } else { "1" });
	format!("?{}", query.to_query_string())
}
