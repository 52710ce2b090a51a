//! Cursor tokens and the codecs that produce them
//!
//! A cursor names the ordering-key value of the row that precedes a page.
//! On the wire it is an opaque, URL-safe token; each [`CursorCodec`] decides
//! how keys map to tokens.

mod codec;
mod opaque;
mod signed;
mod timestamp;

pub use codec::{BEGINNING_TOKEN, Cursor, CursorCodec};
pub use opaque::OpaqueCursorCodec;
pub use signed::SignedCursorCodec;
pub use timestamp::TimestampCursorCodec;
