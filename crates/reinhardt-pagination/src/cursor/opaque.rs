//! Base64url cursor codec for arbitrary text keys

use super::codec::CursorCodec;
use crate::error::{PaginationError, Result};
use base64::{Engine as _, engine::general_purpose};

/// Cursor codec for text keys
///
/// Tokens are the UTF-8 bytes of the key in base64url without padding, so
/// they never need escaping inside a query string.
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::{CursorCodec, OpaqueCursorCodec};
///
/// let codec = OpaqueCursorCodec::new();
/// let token = codec.encode_key(&"Deimos".to_string());
/// assert_eq!(token, "RGVpbW9z");
/// assert_eq!(codec.decode_key(&token).unwrap(), "Deimos");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueCursorCodec;

impl OpaqueCursorCodec {
	/// Create a new opaque cursor codec
	pub fn new() -> Self {
		Self
	}
}

impl CursorCodec for OpaqueCursorCodec {
	type Key = String;

	fn encode_key(&self, key: &String) -> String {
		general_purpose::URL_SAFE_NO_PAD.encode(key.as_bytes())
	}

	fn decode_key(&self, token: &str) -> Result<String> {
		let decoded = general_purpose::URL_SAFE_NO_PAD
			.decode(token)
			.map_err(|_| PaginationError::InvalidCursor("Invalid cursor".to_string()))?;
		let key = String::from_utf8(decoded)
			.map_err(|_| PaginationError::InvalidCursor("Invalid cursor encoding".to_string()))?;
		if key.is_empty() {
			return Err(PaginationError::InvalidCursor("Empty cursor key".to_string()));
		}
		Ok(key)
	}

	fn parse_field(&self, value: &str) -> Result<String> {
		if value.is_empty() {
			return Err(PaginationError::InvalidCursorField {
				value: value.to_string(),
				reason: "cursor keys must not be empty".to_string(),
			});
		}
		Ok(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cursor::{BEGINNING_TOKEN, Cursor};
	use rstest::rstest;

	#[rstest]
	#[case("Mercury")]
	#[case("2024-01-01 12:00:00")]
	#[case("a&b=c?d")]
	#[case("日本語")]
	fn test_round_trip(#[case] key: &str) {
		// Arrange
		let codec = OpaqueCursorCodec::new();

		// Act
		let token = codec.encode_key(&key.to_string());
		let decoded = codec.decode_key(&token).unwrap();

		// Assert
		assert_eq!(decoded, key);
		assert!(
			token
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
		);
	}

	#[rstest]
	fn test_invalid_token_is_rejected() {
		let codec = OpaqueCursorCodec::new();

		let result = codec.decode_key("not-valid-base64!!!");

		assert!(matches!(result, Err(PaginationError::InvalidCursor(_))));
	}

	#[rstest]
	fn test_beginning_sentinel_is_not_a_key() {
		let codec = OpaqueCursorCodec::new();

		assert!(codec.decode_key(BEGINNING_TOKEN).is_err());
		assert_eq!(codec.try_decode(BEGINNING_TOKEN).unwrap(), Cursor::Beginning);
	}

	#[rstest]
	fn test_empty_field_is_rejected() {
		let codec = OpaqueCursorCodec::new();

		assert!(codec.parse_field("").is_err());
	}
}
