//! Timestamp cursor codec

use super::codec::CursorCodec;
use crate::error::{PaginationError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Default format of timestamp fields in rows
pub const DEFAULT_FIELD_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TOKEN_FORMAT: &str = "%Y%m%d%H%M%S";
const TOKEN_LEN: usize = 14;

/// Cursor codec for timestamp keys
///
/// Rows carry the cursor field in a lexicographically sortable textual form
/// (`2024-01-01 12:00:00` by default); tokens use the compact
/// `YYYYMMDDHHMMSS` form (`20240101120000`). Keys have second precision, and
/// decoding canonicalizes: re-encoding a decoded token reproduces it.
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::{CursorCodec, TimestampCursorCodec};
///
/// let codec = TimestampCursorCodec::new();
/// let key = codec.parse_field("2024-01-01 12:00:00").unwrap();
///
/// assert_eq!(codec.encode_key(&key), "20240101120000");
/// assert_eq!(codec.decode_key("20240101120000").unwrap(), key);
/// assert!(codec.decode_key("2024-01-01").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TimestampCursorCodec {
	field_format: String,
}

impl TimestampCursorCodec {
	/// Create a codec for fields in [`DEFAULT_FIELD_FORMAT`]
	pub fn new() -> Self {
		Self {
			field_format: DEFAULT_FIELD_FORMAT.to_string(),
		}
	}

	/// Set the `chrono` format used by row fields
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::{CursorCodec, TimestampCursorCodec};
	///
	/// let codec = TimestampCursorCodec::new().field_format("%d/%m/%Y %H:%M");
	/// let key = codec.parse_field("05/01/2024 14:30").unwrap();
	/// assert_eq!(codec.encode_key(&key), "20240105143000");
	/// ```
	pub fn field_format(mut self, format: impl Into<String>) -> Self {
		self.field_format = format.into();
		self
	}
}

impl Default for TimestampCursorCodec {
	fn default() -> Self {
		Self::new()
	}
}

impl CursorCodec for TimestampCursorCodec {
	type Key = NaiveDateTime;

	fn encode_key(&self, key: &NaiveDateTime) -> String {
		key.format(TOKEN_FORMAT).to_string()
	}

	fn decode_key(&self, token: &str) -> Result<NaiveDateTime> {
		if token.len() != TOKEN_LEN || !token.bytes().all(|b| b.is_ascii_digit()) {
			return Err(PaginationError::InvalidCursor(format!(
				"expected {} digits, got {:?}",
				TOKEN_LEN, token
			)));
		}

		// All bytes are ASCII digits, so slicing and parsing cannot fail.
		let part = |range: std::ops::Range<usize>| -> u32 {
			token[range].parse().unwrap_or_default()
		};
		let year = part(0..4) as i32;

		NaiveDate::from_ymd_opt(year, part(4..6), part(6..8))
			.and_then(|date| date.and_hms_opt(part(8..10), part(10..12), part(12..14)))
			.ok_or_else(|| {
				PaginationError::InvalidCursor(format!("{:?} is not a valid timestamp", token))
			})
	}

	fn parse_field(&self, value: &str) -> Result<NaiveDateTime> {
		NaiveDateTime::parse_from_str(value.trim(), &self.field_format).map_err(|e| {
			PaginationError::InvalidCursorField {
				value: value.to_string(),
				reason: e.to_string(),
			}
		})
	}
}
