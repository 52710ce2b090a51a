//! HTML renderers
//!
//! Each renderer turns a model into the data its template expects
//! (`prepare`) and renders that data through a
//! [`TemplateEngine`](reinhardt_template::TemplateEngine) (`render`).
//! Every user-provided string is sanitized during `prepare`.

pub mod pager;
pub mod select;
pub mod table;

pub use pager::{ButtonData, HiddenField, PagerData, PagerRenderer};
pub use select::{OptGroupData, OptionData, Select, SelectData, SelectOption, SelectRenderer};
pub use table::{CellData, ColumnData, RowData, TableData, TableRenderer};
