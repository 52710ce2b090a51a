//! Message keys used by the table widgets and their English text

use crate::catalog::MessageCatalog;
use once_cell::sync::Lazy;

/// Label of the "first page" pager button
pub const PAGER_FIRST_PAGE: &str = "table-pager-button-first-page";
/// Label of the "previous page" pager button
pub const PAGER_PREV_PAGE: &str = "table-pager-button-prev-page";
/// Label of the "next page" pager button
pub const PAGER_NEXT_PAGE: &str = "table-pager-button-next-page";
/// Label of the "last page" pager button
pub const PAGER_LAST_PAGE: &str = "table-pager-button-last-page";
/// Page-size option text; `$1` is the page size
pub const PAGER_ITEMS_PER_PAGE: &str = "table-pager-items-per-page-current";
/// Pager status; `$1`–`$2` is the ordinal range and `$3` the total
pub const PAGER_ITEMS_CURRENT: &str = "table-pager-items-current";
/// Pager status when there is nothing to show
pub const PAGER_ITEMS_PENDING: &str = "table-pager-items-pending";
/// Table body text when there are no rows
pub const TABLE_EMPTY: &str = "table-empty";

const ENGLISH: &[(&str, &str)] = &[
	(PAGER_FIRST_PAGE, "First page"),
	(PAGER_PREV_PAGE, "Previous page"),
	(PAGER_NEXT_PAGE, "Next page"),
	(PAGER_LAST_PAGE, "Last page"),
	(PAGER_ITEMS_PER_PAGE, "$1 rows"),
	(PAGER_ITEMS_CURRENT, "Showing results $1–$2 of $3"),
	(PAGER_ITEMS_PENDING, "No results"),
	(TABLE_EMPTY, "No data"),
];

static ENGLISH_CATALOG: Lazy<MessageCatalog> = Lazy::new(|| {
	let mut catalog = MessageCatalog::new("en");
	for (key, text) in ENGLISH {
		catalog.add_translation(*key, *text);
	}
	catalog
});

/// Returns the built-in English catalog
pub fn english() -> &'static MessageCatalog {
	&ENGLISH_CATALOG
}
