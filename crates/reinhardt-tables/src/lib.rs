//! Sortable, cursor-paginated data tables for Reinhardt
//!
//! This crate turns an in-memory row collection and the current request's
//! query values into table and pager HTML. All state lives in the query
//! string (`sort`, `asc`, `desc`, `offset`, `limit`), so every render is a
//! pure function of its inputs.
//!
//! # Features
//!
//! - **Columns**: ids, labels, sortable flags and alignment
//! - **Sorting**: URL parameter-based sorting (`?sort=field&desc=1`) with
//!   silent fallback to a default column
//! - **Pagination**: cursor-based paging through `reinhardt-pagination`
//! - **Rendering**: table, pager and select renderers over a pluggable
//!   template engine, with localized pager text
//! - **Configuration**: `TableSettings` from code, TOML or JSON
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableView] --> B[SortSpec]
//!     A --> C[CursorPaginator]
//!     A --> D[Table]
//!     D --> E[Columns]
//!     D --> F[Rows]
//!     D --> G[Pager]
//!     H[TableRenderer] --> D
//!     H --> I[PagerRenderer]
//!     I --> G
//!     I --> J[SelectRenderer]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_i18n::CatalogLocalizer;
//! use reinhardt_pagination::OpaqueCursorCodec;
//! use reinhardt_tables::{Column, QueryParams, Row, TableRenderer, TableView};
//! use reinhardt_template::TeraEngine;
//! use std::sync::Arc;
//!
//! let rows: Vec<Row> = ["Io", "Europa", "Ganymede", "Callisto"]
//!     .iter()
//!     .map(|name| Row::new().with("title", *name))
//!     .collect();
//!
//! let view = TableView::new(
//!     vec![Column::new("title", "Title").sortable(true)],
//!     OpaqueCursorCodec::new(),
//! );
//! let table = view
//!     .builder(&rows, &QueryParams::parse("?limit=5"))
//!     .unwrap()
//!     .caption("Galilean moons")
//!     .build()
//!     .unwrap();
//!
//! let renderer = TableRenderer::new(
//!     Arc::new(TeraEngine::new()),
//!     Arc::new(CatalogLocalizer::english()),
//! );
//! let html = renderer.render(&table).unwrap();
//!
//! assert!(html.contains("Galilean moons"));
//! assert!(html.contains("Showing results 1–4 of 4"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod pager;
pub mod render;
pub mod request;
pub mod row;
pub mod settings;
pub mod sorting;
pub mod table;
pub mod view;

// Re-exports for convenience
pub use column::{Align, Column};
pub use error::{Result, TableError};
pub use pager::{Pager, PagerAction, PagerPosition};
pub use render::{PagerRenderer, Select, SelectOption, SelectRenderer, TableRenderer};
pub use request::{QueryParams, RequestValues};
pub use row::{CellValue, Row};
pub use settings::{SettingsError, TableSettings};
pub use sorting::{SortSpec, sort_rows};
pub use table::{Table, TableBuilder};
pub use view::TableView;
