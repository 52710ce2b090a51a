//! Column definitions

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a column's header and cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// Leading edge
	#[default]
	Start,
	/// Centered
	Center,
	/// Trailing edge
	End,
	/// Trailing edge with tabular figures
	Number,
}

impl Align {
	/// Returns the alignment as used in CSS modifier classes
	pub fn as_str(&self) -> &'static str {
		match self {
			Align::Start => "start",
			Align::Center => "center",
			Align::End => "end",
			Align::Number => "number",
		}
	}
}

/// A table column
///
/// The id addresses the matching cell in each [`Row`](crate::Row) and is the
/// value of the `sort` query parameter.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::{Align, Column};
///
/// let column = Column::new("diameter_km", "Diameter (km)")
///     .sortable(true)
///     .align(Align::Number);
///
/// assert_eq!(column.id(), "diameter_km");
/// assert!(column.is_sortable());
/// assert_eq!(column.alignment(), Some(Align::Number));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	id: String,
	label: String,
	#[serde(default)]
	sortable: bool,
	#[serde(default)]
	align: Option<Align>,
}

impl Column {
	/// Creates an unsortable, unaligned column
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			sortable: false,
			align: None,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets the alignment
	pub fn align(mut self, align: Align) -> Self {
		self.align = Some(align);
		self
	}

	/// Returns the column id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the header label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns whether rows can be sorted by this column
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the alignment, if one was set
	pub fn alignment(&self) -> Option<Align> {
		self.align
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_column_defaults() {
		let column = Column::new("title", "Title");
		assert_eq!(column.id(), "title");
		assert_eq!(column.label(), "Title");
		assert!(!column.is_sortable());
		assert_eq!(column.alignment(), None);
	}

	#[rstest]
	fn test_column_deserialize() {
		// Arrange
		let json = r#"{"id": "page_id", "label": "ID", "sortable": true, "align": "end"}"#;

		// Act
		let column: Column = serde_json::from_str(json).unwrap();

		// Assert
		assert_eq!(column, Column::new("page_id", "ID").sortable(true).align(Align::End));
	}
}
