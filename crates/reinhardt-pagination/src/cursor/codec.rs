//! Cursor value type and codec trait

use crate::error::{PaginationError, Result};
use std::fmt::Debug;

/// Token reserved for [`Cursor::Beginning`]
///
/// No codec may produce this token for a key. It is not valid base64 on its
/// own and cannot be parsed as a timestamp, so the built-in codecs never
/// collide with it.
pub const BEGINNING_TOKEN: &str = "-";

/// A decoded pagination cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor<K> {
	/// Addresses the start of the collection
	///
	/// Behaves like "no cursor" when filtering, but stays distinguishable from
	/// it so that a previous-page link pointing at the first page is never
	/// mistaken for "no previous page".
	Beginning,
	/// Resumes strictly after the row with this key
	After(K),
}

impl<K> Cursor<K> {
	/// Returns the anchor key, if any
	pub fn key(&self) -> Option<&K> {
		match self {
			Self::Beginning => None,
			Self::After(key) => Some(key),
		}
	}

	/// Returns true for [`Cursor::Beginning`]
	pub fn is_beginning(&self) -> bool {
		matches!(self, Self::Beginning)
	}
}

/// Trait for encoding and decoding pagination cursors
///
/// Implementations map an ordering key to a compact, URL-safe token and
/// back. The round-trip law `decode_key(encode_key(k)) == k` must hold for
/// every key produced by [`CursorCodec::parse_field`] or
/// [`CursorCodec::decode_key`].
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::{Cursor, CursorCodec, OpaqueCursorCodec};
///
/// let codec = OpaqueCursorCodec::new();
/// let token = codec.encode(&Cursor::After("Mercury".to_string()));
///
/// assert_eq!(codec.decode(Some(token.as_str())), Some(Cursor::After("Mercury".to_string())));
/// assert_eq!(codec.decode(Some("%%%")), None);
/// assert_eq!(codec.decode(None), None);
/// ```
pub trait CursorCodec: Send + Sync {
	/// The ordering key carried by a cursor
	type Key: Ord + Clone + Debug + Send + Sync;

	/// Encode a key into a token
	fn encode_key(&self, key: &Self::Key) -> String;

	/// Decode a token back into a key
	fn decode_key(&self, token: &str) -> Result<Self::Key>;

	/// Convert a row's natural field representation into a key
	fn parse_field(&self, value: &str) -> Result<Self::Key>;

	/// Encode a cursor, including the beginning sentinel
	fn encode(&self, cursor: &Cursor<Self::Key>) -> String {
		match cursor {
			Cursor::Beginning => BEGINNING_TOKEN.to_string(),
			Cursor::After(key) => self.encode_key(key),
		}
	}

	/// Strictly decode a token
	fn try_decode(&self, token: &str) -> Result<Cursor<Self::Key>> {
		let token = token.trim();
		if token.is_empty() {
			return Err(PaginationError::InvalidCursor("empty cursor".to_string()));
		}
		if token == BEGINNING_TOKEN {
			return Ok(Cursor::Beginning);
		}
		self.decode_key(token).map(Cursor::After)
	}

	/// Leniently decode an optional token taken from a request
	///
	/// Absent, empty or unparseable tokens all mean "no cursor".
	fn decode(&self, token: Option<&str>) -> Option<Cursor<Self::Key>> {
		let token = token.filter(|t| !t.trim().is_empty())?;
		match self.try_decode(token) {
			Ok(cursor) => Some(cursor),
			Err(err) => {
				tracing::debug!(token = %token, error = %err, "Ignoring unparseable cursor");
				None
			}
		}
	}
}

impl<C: CursorCodec + ?Sized> CursorCodec for &C {
	type Key = C::Key;

	fn encode_key(&self, key: &Self::Key) -> String {
		(**self).encode_key(key)
	}

	fn decode_key(&self, token: &str) -> Result<Self::Key> {
		(**self).decode_key(token)
	}

	fn parse_field(&self, value: &str) -> Result<Self::Key> {
		(**self).parse_field(value)
	}
}
