//! # Reinhardt Widgets
//!
//! Sortable, cursor-paginated HTML data tables for server-rendered pages.
//!
//! A table is computed from three inputs: the full row collection, the
//! column definitions and the current request's query values. Sorting,
//! page size and position all travel in the URL, so every request is
//! answered without server-side state.
//!
//! ## Crates
//!
//! - [`pagination`]: cursors, cursor codecs and the cursor paginator
//! - [`template`]: the template engine seam, HTML escaping and attribute resolution
//! - [`i18n`]: message catalogs and the localizer seam
//! - [`tables`]: columns, rows, sorting, the pager, renderers and [`TableView`]
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_widgets::prelude::*;
//! use std::sync::Arc;
//!
//! let rows = vec![
//!     Row::new().with("title", "Mercury").with("creation_date", "2024-01-01 12:00:00"),
//!     Row::new().with("title", "Venus").with("creation_date", "2024-01-05 14:30:00"),
//! ];
//! let view = TableView::new(
//!     vec![
//!         Column::new("title", "Title").sortable(true),
//!         Column::new("creation_date", "Creation Date").sortable(true),
//!     ],
//!     TimestampCursorCodec::new(),
//! )
//! .with_default_sort("creation_date")
//! .with_cursor_field("creation_date");
//!
//! let table = view.table(&rows, &QueryParams::parse("?desc=1")).unwrap();
//! let renderer = TableRenderer::new(
//!     Arc::new(TeraEngine::new()),
//!     Arc::new(CatalogLocalizer::english()),
//! );
//! let html = renderer.render(&table).unwrap();
//!
//! assert!(html.contains("Showing results 1–2 of 2"));
//! ```

pub use reinhardt_i18n as i18n;
pub use reinhardt_pagination as pagination;
pub use reinhardt_tables as tables;
pub use reinhardt_template as template;

pub use reinhardt_i18n::{CatalogLocalizer, Localizer, MessageCatalog};
pub use reinhardt_pagination::{
	Cursor, CursorCodec, CursorPaginator, OpaqueCursorCodec, Page, PageSizeOptions,
	SignedCursorCodec, SortDirection, TimestampCursorCodec,
};
pub use reinhardt_tables::{
	Align, CellValue, Column, Pager, PagerPosition, PagerRenderer, QueryParams, RequestValues, Row,
	Select, SelectOption, SelectRenderer, SortSpec, Table, TableError, TableRenderer,
	TableSettings, TableView,
};
pub use reinhardt_template::{TemplateEngine, TeraEngine};

/// Re-exports for building and rendering tables
pub mod prelude {
	pub use crate::{
		CatalogLocalizer, Column, CursorCodec, Localizer, OpaqueCursorCodec, PagerPosition,
		QueryParams, RequestValues, Row, SignedCursorCodec, SortDirection, Table, TableRenderer,
		TableSettings, TableView, TemplateEngine, TeraEngine, TimestampCursorCodec,
	};
}
