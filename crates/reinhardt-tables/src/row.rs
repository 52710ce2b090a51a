//! Row data

use crate::error::{Result, TableError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A scalar cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
	/// No value
	Null,
	/// Boolean
	Bool(bool),
	/// Whole number
	Integer(i64),
	/// Floating point number
	Float(f64),
	/// Text, including timestamps in sortable formats
	Text(String),
}

impl CellValue {
	/// Total order used for sorting
	///
	/// Values of different kinds order as null, booleans, numbers, text.
	/// Integers and floats compare by exact numeric value. A NaN orders by
	/// its sign bit, below or above every number.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::CellValue;
	/// use std::cmp::Ordering;
	///
	/// assert_eq!(CellValue::from(9).compare(&CellValue::from(10)), Ordering::Less);
	/// assert_eq!(CellValue::from("9").compare(&CellValue::from("10")), Ordering::Greater);
	/// assert_eq!(CellValue::from(2).compare(&CellValue::from(1.5)), Ordering::Greater);
	/// ```
	pub fn compare(&self, other: &CellValue) -> Ordering {
		use CellValue::*;

		match (self, other) {
			(Integer(a), Integer(b)) => a.cmp(b),
			(Integer(a), Float(b)) => compare_integer_float(*a, *b),
			(Float(a), Integer(b)) => compare_integer_float(*b, *a).reverse(),
			(Float(a), Float(b)) => a.total_cmp(b),
			(Text(a), Text(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			(a, b) => a.rank().cmp(&b.rank()),
		}
	}

	fn rank(&self) -> u8 {
		match self {
			CellValue::Null => 0,
			CellValue::Bool(_) => 1,
			CellValue::Integer(_) | CellValue::Float(_) => 2,
			CellValue::Text(_) => 3,
		}
	}

	/// Returns true for [`CellValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, CellValue::Null)
	}
}

/// 2^63, the smallest float above every `i64`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn compare_integer_float(integer: i64, float: f64) -> Ordering {
	if float.is_nan() {
		return if float.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if float >= I64_BOUND {
		return Ordering::Less;
	}
	if float < -I64_BOUND {
		return Ordering::Greater;
	}
	// the whole part now fits an i64 exactly
	let whole = float.trunc();
	integer.cmp(&(whole as i64)).then_with(|| {
		match (float - whole).partial_cmp(&0.0) {
			Some(Ordering::Greater) => Ordering::Less,
			Some(Ordering::Less) => Ordering::Greater,
			_ => Ordering::Equal,
		}
	})
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellValue::Null => Ok(()),
			CellValue::Bool(b) => write!(f, "{}", b),
			CellValue::Integer(i) => write!(f, "{}", i),
			CellValue::Float(x) => write!(f, "{}", x),
			CellValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		CellValue::Text(value.to_string())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		CellValue::Text(value)
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		CellValue::Bool(value)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		CellValue::Integer(value.into())
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		CellValue::Integer(value)
	}
}

impl From<u32> for CellValue {
	fn from(value: u32) -> Self {
		CellValue::Integer(value.into())
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		CellValue::Float(value)
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(CellValue::Null, Into::into)
	}
}

impl TryFrom<serde_json::Value> for CellValue {
	type Error = TableError;

	fn try_from(value: serde_json::Value) -> Result<Self> {
		use serde_json::Value;

		match value {
			Value::Null => Ok(CellValue::Null),
			Value::Bool(b) => Ok(CellValue::Bool(b)),
			Value::String(s) => Ok(CellValue::Text(s)),
			Value::Number(n) => n
				.as_i64()
				.map(CellValue::Integer)
				.or_else(|| n.as_f64().map(CellValue::Float))
				.ok_or_else(|| TableError::InvalidRow(format!("unrepresentable number {}", n))),
			Value::Array(_) | Value::Object(_) => Err(TableError::InvalidRow(
				"cell values must be scalars".to_string(),
			)),
		}
	}
}

/// An ordered mapping from column id to cell value
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::{CellValue, Row};
///
/// let row = Row::new()
///     .with("title", "Mercury")
///     .with("diameter_km", 4879)
///     .with("creation_date", "2024-01-01 12:00:00");
///
/// assert_eq!(row.get("diameter_km"), Some(&CellValue::Integer(4879)));
/// assert_eq!(row.get("mass"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
	cells: IndexMap<String, CellValue>,
}

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a cell, builder style
	pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
		self.insert(column, value);
		self
	}

	/// Sets a cell
	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
		self.cells.insert(column.into(), value.into());
	}

	/// Returns the cell for `column`
	pub fn get(&self, column: &str) -> Option<&CellValue> {
		self.cells.get(column)
	}

	/// Returns true if the row has a cell for `column`
	pub fn contains(&self, column: &str) -> bool {
		self.cells.contains_key(column)
	}

	/// Iterates over cells in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
		self.cells.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of cells
	pub fn len(&self) -> usize {
		self.cells.len()
	}

	/// Returns true if the row has no cells
	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut row = Row::new();
		for (column, value) in iter {
			row.insert(column, value);
		}
		row
	}
}

impl TryFrom<serde_json::Value> for Row {
	type Error = TableError;

	/// Converts a JSON object of scalars into a row
	fn try_from(value: serde_json::Value) -> Result<Self> {
		let serde_json::Value::Object(map) = value else {
			return Err(TableError::InvalidRow("expected a JSON object".to_string()));
		};

		let mut row = Row::new();
		for (column, value) in map {
			let cell = CellValue::try_from(value)
				.map_err(|e| TableError::InvalidRow(format!("column '{}': {}", column, e)))?;
			row.insert(column, cell);
		}
		Ok(row)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(CellValue::Null, CellValue::from(false), Ordering::Less)]
	#[case(CellValue::from(true), CellValue::from(0), Ordering::Less)]
	#[case(CellValue::from(57.9), CellValue::from(108.2), Ordering::Less)]
	#[case(CellValue::from(1434), CellValue::from(1434.0), Ordering::Equal)]
	#[case(CellValue::from(12.4), CellValue::from("12.4"), Ordering::Less)]
	#[case(CellValue::from("Venus"), CellValue::from("Earth"), Ordering::Greater)]
	#[case(CellValue::from(9_007_199_254_740_993_i64), CellValue::from(9_007_199_254_740_992.0), Ordering::Greater)]
	#[case(CellValue::from(i64::MAX), CellValue::from(9_223_372_036_854_775_808.0), Ordering::Less)]
	#[case(CellValue::from(i64::MIN), CellValue::from(-9_223_372_036_854_775_808.0), Ordering::Equal)]
	#[case(CellValue::from(-3), CellValue::from(-2.5), Ordering::Less)]
	#[case(CellValue::from(-2), CellValue::from(-2.5), Ordering::Greater)]
	#[case(CellValue::from(0), CellValue::from(-0.0), Ordering::Equal)]
	#[case(CellValue::from(i64::MIN), CellValue::from(f64::NEG_INFINITY), Ordering::Greater)]
	#[case(CellValue::from(i64::MAX), CellValue::from(f64::NAN), Ordering::Less)]
	#[case(CellValue::from(i64::MIN), CellValue::from(-f64::NAN), Ordering::Greater)]
	fn test_compare(#[case] a: CellValue, #[case] b: CellValue, #[case] expected: Ordering) {
		assert_eq!(a.compare(&b), expected);
		assert_eq!(b.compare(&a), expected.reverse());
	}

	#[rstest]
	#[case(CellValue::Null, "")]
	#[case(CellValue::from(true), "true")]
	#[case(CellValue::from(4879), "4879")]
	#[case(CellValue::from(57.9), "57.9")]
	#[case(CellValue::from("Mars"), "Mars")]
	fn test_display(#[case] value: CellValue, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_row_from_json() {
		// Arrange
		let value = json!({
			"title": "Phobos",
			"page_id": 29,
			"diameter_km": 22.4,
			"creation_date": "2024-11-10 16:30:00",
			"notes": null,
		});

		// Act
		let row = Row::try_from(value).unwrap();

		// Assert
		assert_eq!(row.len(), 5);
		assert_eq!(row.get("page_id"), Some(&CellValue::Integer(29)));
		assert_eq!(row.get("diameter_km"), Some(&CellValue::Float(22.4)));
		assert_eq!(row.get("notes"), Some(&CellValue::Null));
	}

	#[rstest]
	#[case::not_an_object(json!(["Phobos"]))]
	#[case::nested_object(json!({"title": {"en": "Phobos"}}))]
	#[case::array_cell(json!({"moons": ["Phobos", "Deimos"]}))]
	fn test_row_from_json_rejects_non_scalar_input(#[case] value: serde_json::Value) {
		assert!(matches!(Row::try_from(value), Err(TableError::InvalidRow(_))));
	}

	#[rstest]
	fn test_option_into_cell() {
		let row = Row::new().with("a", Some(3)).with("b", None::<i64>);
		assert_eq!(row.get("a"), Some(&CellValue::Integer(3)));
		assert!(row.get("b").is_some_and(CellValue::is_null));
	}
}
