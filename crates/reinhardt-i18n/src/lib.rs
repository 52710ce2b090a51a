//! Localization for Reinhardt widgets
//!
//! Widgets never hard-code user-visible text. They ask a [`Localizer`] for a
//! message key plus positional parameters. [`CatalogLocalizer`] serves keys
//! from a [`MessageCatalog`] and falls back to the built-in English text.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod error;
pub mod localizer;
pub mod messages;

pub use catalog::MessageCatalog;
pub use error::{I18nError, Result};
pub use localizer::{CatalogLocalizer, Localizer, substitute};
