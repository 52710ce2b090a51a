//! Template rendering for Reinhardt widgets
//!
//! Widget renderers shape their data, sanitize every user-provided string,
//! and hand the result to a [`TemplateEngine`]. This crate provides the
//! engine abstraction, a Tera-backed implementation with the built-in
//! `table`, `pager` and `select` templates, HTML escaping and attribute
//! resolution.
//!
//! # Architecture
//!
//! ```mermaid
//! graph LR
//!     A[Component data] --> B[Sanitizer]
//!     B --> C[resolve / resolve_classes]
//!     C --> D[serde_json::Value]
//!     D --> E[TemplateEngine]
//!     E --> F[HTML]
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod engine;
pub mod error;
pub mod escaping;
pub mod sanitizer;

pub use attributes::{AttributeValue, Attributes, resolve, resolve_classes};
pub use engine::{PAGER_TEMPLATE, SELECT_TEMPLATE, TABLE_TEMPLATE, TemplateEngine, TeraEngine};
pub use error::{Result, TemplateError};
pub use escaping::{escape_html, escape_html_attr};
pub use sanitizer::Sanitizer;
