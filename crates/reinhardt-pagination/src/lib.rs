//! Cursor pagination for Reinhardt tables
//!
//! This crate computes pages over a fully materialized, already sorted
//! collection. Pagination state lives entirely in the request: an opaque
//! cursor token, a traversal direction and a page size. Nothing is kept
//! between requests.
//!
//! # Features
//!
//! - **Cursors**: `Cursor::After(key)` resumes after a known row, `Cursor::Beginning`
//!   explicitly addresses the start of the collection
//! - **Codecs**: timestamp, opaque (base64url) and HMAC-signed cursor tokens
//! - **Page sizes**: allow-listed page sizes with silent fallback to a default
//! - **Navigation**: first/previous/next/last tokens and 1-based ordinals
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Request values] --> B[PageSizeOptions]
//!     A --> C[CursorCodec]
//!     B --> D[PageRequest]
//!     C --> D
//!     D --> E[CursorPaginator]
//!     F[Sorted rows] --> E
//!     E --> G[Page]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_pagination::{CursorPaginator, OpaqueCursorCodec, SortDirection};
//!
//! let rows = vec!["a", "b", "c", "d", "e", "f", "g"];
//! let paginator = CursorPaginator::new(OpaqueCursorCodec::new());
//!
//! let request = paginator.request(None, Some("5"), SortDirection::Ascending);
//! let page = paginator
//!     .paginate(&rows, |row| Ok(row.to_string()), &request)
//!     .unwrap();
//!
//! assert_eq!(page.rows, vec!["a", "b", "c", "d", "e"]);
//! assert_eq!(page.start_ordinal, 1);
//! assert_eq!(page.end_ordinal, 5);
//! assert!(page.next_offset.is_some());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod cursor;
pub mod direction;
pub mod error;
pub mod page;
pub mod page_size;
pub mod paginator;

pub use cursor::{
	BEGINNING_TOKEN, Cursor, CursorCodec, OpaqueCursorCodec, SignedCursorCodec,
	TimestampCursorCodec,
};
pub use direction::SortDirection;
pub use error::{PaginationError, Result};
pub use page::Page;
pub use page_size::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES, PageSizeOptions};
pub use paginator::{CursorPaginator, PageRequest};
